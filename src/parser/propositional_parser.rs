use pest::error::Error;
use pest::iterators::Pair;
use pest::Parser;

use crate::formulas::{EncodedFormula, FormulaFactory};

#[derive(Parser)]
#[grammar = "parser/propositional.pest"]
struct PropositionalParser;

pub fn parse<I: AsRef<str>>(f: &FormulaFactory, input: I) -> Result<EncodedFormula, Box<Error<Rule>>> {
    let parsed = PropositionalParser::parse(Rule::propositional, input.as_ref())?.next().unwrap();

    let mut formula = f.verum();

    for x in parsed.into_inner() {
        match x.as_rule() {
            Rule::equivalence => {
                formula = parse_equivalence(f, x);
            }
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok(formula)
}

// `<=>` and `=>` are right-associative, so the operands are folded from the
// back.
fn parse_equivalence(f: &FormulaFactory, equivalence: Pair<Rule>) -> EncodedFormula {
    let mut implications = equivalence.into_inner().rev();
    let mut form = parse_implication(f, implications.next().unwrap());

    for implication in implications {
        let form_left = parse_implication(f, implication);
        form = f.equivalence(form_left, form);
    }
    form
}

fn parse_implication(f: &FormulaFactory, implication: Pair<Rule>) -> EncodedFormula {
    let mut disjunctions = implication.into_inner().rev();
    let mut form = parse_disjunction(f, disjunctions.next().unwrap());

    for disjunction in disjunctions {
        let form_left = parse_disjunction(f, disjunction);
        form = f.implication(form_left, form);
    }
    form
}

fn parse_disjunction(f: &FormulaFactory, disjunction: Pair<Rule>) -> EncodedFormula {
    let mut tokens = disjunction.into_inner();
    let mut form = parse_xor(f, tokens.next().unwrap());

    while let Some(operator) = tokens.next() {
        let form_right = parse_xor(f, tokens.next().unwrap());
        form = match operator.as_rule() {
            Rule::or_op => f.or(form, form_right),
            Rule::nor_op => f.nor(form, form_right),
            _ => unreachable!(),
        };
    }
    form
}

fn parse_xor(f: &FormulaFactory, xor: Pair<Rule>) -> EncodedFormula {
    let mut conjunctions = xor.into_inner();
    let mut form = parse_conjunction(f, conjunctions.next().unwrap());

    for conjunction in conjunctions {
        let form_right = parse_conjunction(f, conjunction);
        form = f.xor(form, form_right);
    }
    form
}

fn parse_conjunction(f: &FormulaFactory, conjunction: Pair<Rule>) -> EncodedFormula {
    let mut tokens = conjunction.into_inner();
    let mut form = parse_literal(f, tokens.next().unwrap());

    while let Some(operator) = tokens.next() {
        let form_right = parse_literal(f, tokens.next().unwrap());
        form = match operator.as_rule() {
            Rule::and_op => f.and(form, form_right),
            Rule::nand_op => f.nand(form, form_right),
            _ => unreachable!(),
        };
    }
    form
}

// Negations are kept as parsed: `~~a` yields a double negation.
fn parse_literal(f: &FormulaFactory, literal: Pair<Rule>) -> EncodedFormula {
    let mut negations = 0;
    let mut form = None;

    for x in literal.into_inner() {
        match x.as_rule() {
            Rule::not => negations += 1,
            Rule::atom => form = Some(parse_atom(f, x)),
            _ => unreachable!(),
        }
    }

    let mut form = form.unwrap();
    for _ in 0..negations {
        form = f.not(form);
    }
    form
}

fn parse_atom(f: &FormulaFactory, atom: Pair<Rule>) -> EncodedFormula {
    let x = atom.into_inner().next().unwrap();
    match x.as_rule() {
        Rule::constant => parse_constant(f, x),
        Rule::variable => f.variable(x.as_str()),
        Rule::equivalence => parse_equivalence(f, x),
        _ => unreachable!(),
    }
}

fn parse_constant(f: &FormulaFactory, constant: Pair<Rule>) -> EncodedFormula {
    let con = constant.into_inner().next().unwrap().as_rule();
    match con {
        Rule::verum => f.verum(),
        Rule::falsum => f.falsum(),
        _ => unreachable!(),
    }
}
