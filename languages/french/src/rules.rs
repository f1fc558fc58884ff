//! Suffix rewrite tables. Within each table longer endings come first.

/// (surface, lemma)
pub const IRREGULAR: &[(&str, &str)] = &[
    ("yeux", "œil"),
    ("cieux", "ciel"),
    ("messieurs", "monsieur"),
    ("mesdames", "madame"),
    ("mesdemoiselles", "mademoiselle"),
    ("suis", "être"),
    ("es", "être"),
    ("est", "être"),
    ("sommes", "être"),
    ("êtes", "être"),
    ("sont", "être"),
    ("étais", "être"),
    ("était", "être"),
    ("étaient", "être"),
    ("été", "être"),
    ("sera", "être"),
    ("ai", "avoir"),
    ("as", "avoir"),
    ("a", "avoir"),
    ("avons", "avoir"),
    ("avez", "avoir"),
    ("ont", "avoir"),
    ("avait", "avoir"),
    ("eu", "avoir"),
    ("aura", "avoir"),
    ("vais", "aller"),
    ("vas", "aller"),
    ("va", "aller"),
    ("vont", "aller"),
    ("ira", "aller"),
    ("fais", "faire"),
    ("fait", "faire"),
    ("faites", "faire"),
    ("font", "faire"),
    ("fera", "faire"),
    ("peux", "pouvoir"),
    ("peut", "pouvoir"),
    ("peuvent", "pouvoir"),
    ("pu", "pouvoir"),
    ("veux", "vouloir"),
    ("veut", "vouloir"),
    ("veulent", "vouloir"),
    ("voulu", "vouloir"),
    ("dois", "devoir"),
    ("doit", "devoir"),
    ("doivent", "devoir"),
    ("dû", "devoir"),
    ("sais", "savoir"),
    ("sait", "savoir"),
    ("su", "savoir"),
    ("vu", "voir"),
    ("pris", "prendre"),
    ("mis", "mettre"),
    ("dit", "dire"),
    ("viens", "venir"),
    ("vient", "venir"),
    ("viennent", "venir"),
    ("venu", "venir"),
];

/// Plural and feminine endings of nouns and adjectives
pub const NOMINAL_SUFFIXES: &[(&str, &str)] = &[
    ("eaux", "eau"),
    ("aux", "al"),
    ("aux", "ail"),
    ("euses", "eur"),
    ("euse", "eur"),
    ("rices", "eur"),
    ("rice", "eur"),
    ("ives", "if"),
    ("ive", "if"),
    ("ères", "er"),
    ("ère", "er"),
    ("lles", "l"),
    ("lle", "l"),
    ("nnes", "n"),
    ("nne", "n"),
    ("es", ""),
    ("s", ""),
    ("x", ""),
    ("e", ""),
];

/// Conjugated endings mapped back to -er / -ir / -re infinitives
pub const VERBAL_SUFFIXES: &[(&str, &str)] = &[
    ("issaient", "ir"),
    ("eaient", "er"),
    ("issions", "ir"),
    ("issons", "ir"),
    ("issiez", "ir"),
    ("issent", "ir"),
    ("issais", "ir"),
    ("issait", "ir"),
    ("issant", "ir"),
    ("issez", "ir"),
    ("aient", "er"),
    ("erons", "er"),
    ("eront", "er"),
    ("erais", "er"),
    ("erait", "er"),
    ("irons", "ir"),
    ("iront", "ir"),
    ("eons", "er"),
    ("ions", "er"),
    ("erai", "er"),
    ("eras", "er"),
    ("erez", "er"),
    ("irai", "ir"),
    ("iras", "ir"),
    ("irez", "ir"),
    ("eais", "er"),
    ("eait", "er"),
    ("eant", "er"),
    ("ons", "er"),
    ("ons", "re"),
    ("ent", "er"),
    ("ent", "re"),
    ("ais", "er"),
    ("ait", "er"),
    ("ant", "er"),
    ("ant", "re"),
    ("era", "er"),
    ("ira", "ir"),
    ("ées", "er"),
    ("és", "er"),
    ("ée", "er"),
    ("ez", "er"),
    ("ez", "re"),
    ("es", "er"),
    ("is", "ir"),
    ("it", "ir"),
    ("ie", "ir"),
    ("ue", "re"),
    ("us", "re"),
    ("é", "er"),
    ("e", "er"),
    ("i", "ir"),
    ("u", "re"),
    ("s", "re"),
    ("t", "re"),
];
