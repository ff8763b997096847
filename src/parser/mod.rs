pub(crate) mod propositional_parser;
