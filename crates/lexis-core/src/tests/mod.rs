mod language_tests;
