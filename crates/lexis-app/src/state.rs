use std::path::Path;
use std::sync::Arc;

use lexis_config::Config;
use lexis_core::language::{IdentityLemmatizer, Language, Lemmatizer};
use lexis_core::{Dictionary, Direction, Lexicon, LookupService, SearchEngine};
use lexis_lang_english::EnglishLemmatizer;
use lexis_lang_french::FrenchLemmatizer;

/// Everything a request needs, built once before the listener binds
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LookupService>,
}

impl AppState {
    /// Load both dictionaries and build the lookup service
    pub fn load(config: &Config) -> anyhow::Result<Self> {
        let en_fr = Dictionary::load(Direction::EnFr, Path::new(&config.dictionary.en_fr_path))?;
        let fr_en = Dictionary::load(Direction::FrEn, Path::new(&config.dictionary.fr_en_path))?;

        Ok(Self::from_lexicon(
            Lexicon::new(en_fr, fr_en),
            config.lemmatizer.enabled,
        ))
    }

    pub fn from_lexicon(lexicon: Lexicon, lemmatize: bool) -> Self {
        let (english, french): (Arc<dyn Lemmatizer>, Arc<dyn Lemmatizer>) = if lemmatize {
            (
                Arc::new(EnglishLemmatizer::with_vocabulary(
                    lexicon.dictionary(Direction::EnFr).index().keys(),
                )),
                Arc::new(FrenchLemmatizer::with_vocabulary(
                    lexicon.dictionary(Direction::FrEn).index().keys(),
                )),
            )
        } else {
            tracing::warn!("Lemmatizer disabled, only exact headwords will match");
            (
                Arc::new(IdentityLemmatizer::new(Language::En)),
                Arc::new(IdentityLemmatizer::new(Language::Fr)),
            )
        };

        let engine = SearchEngine::new(Arc::new(lexicon), english, french);

        Self {
            service: Arc::new(LookupService::new(engine)),
        }
    }
}
