use pretty_assertions::assert_eq;
use pymutant::LanguageEngine;
use pymutant::core::engine::operators::{BinaryOperator, CompareOp};
use pymutant::core::engine::tree::NodeKind;
use pymutant::languages::python::engine::PythonLanguageEngine;
use pymutant::types::MutationCategory;
use pymutant::{MutantGenerator, OperatorTable, Sentinels};

/// A table where only the given categories fire, and always
fn forced(categories: &[MutationCategory]) -> OperatorTable {
    let mut table = OperatorTable::uniform(0.0).unwrap();
    for category in categories {
        table.set(*category, 1.0).unwrap();
    }
    table
}

fn mutate_with(table: &OperatorTable, source: &str) -> String {
    let engine = PythonLanguageEngine::new();
    let sentinels = Sentinels::default();
    MutantGenerator::new(&engine, table, &sentinels)
        .mutant(source, 0)
        .expect("source should parse")
        .text
}

fn reparses(source: &str) -> bool {
    PythonLanguageEngine::new().parse(source).is_ok()
}

#[test]
fn test_arithmetic_assignment_scenario() {
    let table = forced(&[MutationCategory::NumberLiteral, MutationCategory::BinaryOp]);
    assert_eq!(mutate_with(&table, "x = 5 + 3\n"), "x = 481 - 481\n");
}

#[test]
fn test_comparison_scenario() {
    let table = forced(&[MutationCategory::Comparison]);
    assert_eq!(
        mutate_with(&table, "if a > b:\n    pass\n"),
        "if a <= b:\n    pass\n"
    );
    assert_eq!(mutate_with(&table, "if a > b: pass\n"), "if a <= b: pass\n");
}

#[test]
fn test_relational_operators_are_negated() {
    let table = forced(&[MutationCategory::Comparison]);
    let cases = [
        ("a < b", "a >= b"),
        ("a <= b", "a > b"),
        ("a > b", "a <= b"),
        ("a >= b", "a < b"),
        ("a < b < c", "a >= b >= c"),
        ("a < b == c", "a >= b == c"),
    ];
    for (before, after) in cases {
        let source = format!("r = {before}\n");
        assert_eq!(mutate_with(&table, &source), format!("r = {after}\n"));
    }
}

#[test]
fn test_equality_membership_and_identity_are_unchanged() {
    let table = forced(&[MutationCategory::Comparison]);
    for op in ["==", "!=", "in", "not in", "is", "is not"] {
        let source = format!("r = a {op} b\n");
        assert_eq!(mutate_with(&table, &source), source);
    }
}

#[test]
fn test_split_two_keyword_operators_are_unchanged() {
    let table = forced(&[MutationCategory::Comparison]);
    for source in [
        "r = (a not # c\n in b)\n",
        "r = (a is \\\n not b)\n",
        "r = a not  in b\n",
    ] {
        assert_eq!(mutate_with(&table, source), source);
    }
}

#[test]
fn test_negation_is_an_involution() {
    for op in [CompareOp::Lt, CompareOp::LtE, CompareOp::Gt, CompareOp::GtE] {
        assert_ne!(op.negated(), op);
        assert_eq!(op.negated().negated(), op);
    }
}

#[test]
fn test_binary_operator_swaps() {
    let table = forced(&[MutationCategory::BinaryOp]);
    let cases = [
        ("a + b", "a - b"),
        ("a - b", "a + b"),
        ("a * b", "a // b"),
        ("a // b", "a * b"),
        ("a / b", "a * b"),
        ("a % b", "a % b"),
        ("a ** b", "a ** b"),
        ("a << b", "a << b"),
        ("a | b", "a | b"),
        ("a @ b", "a @ b"),
    ];
    for (before, after) in cases {
        let source = format!("r = {before}\n");
        assert_eq!(mutate_with(&table, &source), format!("r = {after}\n"));
    }
}

#[test]
fn test_multiplication_never_becomes_true_division() {
    assert_eq!(BinaryOperator::Mult.swapped(), BinaryOperator::FloorDiv);
    for symbol in ["+", "-", "*", "@", "//", "%", "**", "<<", ">>", "|", "^", "&"] {
        let op: BinaryOperator = symbol.parse().unwrap();
        assert_ne!(op.swapped(), BinaryOperator::Div, "{op} became /");
    }
    assert_eq!(BinaryOperator::Div.swapped(), BinaryOperator::Mult);
}

#[test]
fn test_nested_operators_are_all_visited() {
    let table = forced(&[MutationCategory::BinaryOp]);
    assert_eq!(
        mutate_with(&table, "r = (a + b) * (c - d)\n"),
        "r = (a - b) // (c + d)\n"
    );
}

#[test]
fn test_string_literals_keep_their_quoting() {
    let table = forced(&[MutationCategory::StringLiteral]);
    let source = "a = 'x'\nb = \"y\"\nc = r'''z'''\nd = 'p' 'q'\ne = b'raw'\nf = f'{a}'\n";
    assert_eq!(
        mutate_with(&table, source),
        "a = 'SE'\nb = \"SE\"\nc = r'''SE'''\nd = 'SE'\ne = b'raw'\nf = f'{a}'\n"
    );
}

#[test]
fn test_custom_sentinels() {
    let engine = PythonLanguageEngine::new();
    let table = forced(&[MutationCategory::NumberLiteral, MutationCategory::StringLiteral]);
    let sentinels = Sentinels::new("0", "mutated").unwrap();
    let mutant = MutantGenerator::new(&engine, &table, &sentinels)
        .mutant("x = f(12, 'name', 3.5j)\n", 4)
        .unwrap();
    assert_eq!(mutant.text, "x = f(0, 'mutated', 0)\n");
}

#[test]
fn test_removing_every_assignment_leaves_an_empty_module() {
    let table = forced(&[MutationCategory::Assign]);
    let text = mutate_with(&table, "y = 1\nz = 2\n");
    assert_eq!(text.trim(), "");
    assert!(reparses(&text));
}

#[test]
fn test_emptied_function_body_gets_a_placeholder() {
    let table = forced(&[MutationCategory::Assign, MutationCategory::AugAssign]);
    let source = "def f():\n    x = 1\n    x += 2\n\nprint(f())\n";
    let text = mutate_with(&table, source);
    assert_eq!(text, "def f():\n    pass\n\nprint(f())\n");
    assert!(reparses(&text));
}

#[test]
fn test_nested_blocks_stay_valid() {
    let table = forced(&[MutationCategory::Assign]);
    let source = "\
class C:
    limit = 3

    def run(self):
        for i in range(2):
            total = i
        else:
            done = True
        return self
";
    let text = mutate_with(&table, source);
    assert!(reparses(&text), "invalid output:\n{text}");
    assert!(!text.contains('='), "assignments left in:\n{text}");
    assert!(text.contains("return self"));
}

#[test]
fn test_semicolon_separated_statements() {
    let table = forced(&[MutationCategory::Assign]);
    let cases = [
        ("a = 1; b = 2; print(a)\n", "print(a)\n"),
        ("print(a); a = 1\n", "print(a);\n"),
        ("if x:\n    a = 1; b = 2\nprint(x)\n", "if x:\n    pass;\nprint(x)\n"),
        ("print(a); a = 1\nif c:\n    pass\n", "print(a)\nif c:\n    pass\n"),
        (
            "def f():\n    g(); x = 1\n    for i in y:\n        pass\n",
            "def f():\n    g()\n    for i in y:\n        pass\n",
        ),
        (
            "print(a); a = 1; b = 2\nclass C:\n    pass\n",
            "print(a)\nclass C:\n    pass\n",
        ),
    ];
    for (source, expected) in cases {
        let text = mutate_with(&table, source);
        assert_eq!(text, expected);
        assert!(reparses(&text), "invalid output: {text:?}");
    }
}

#[test]
fn test_number_receiver_of_attribute_stays_valid() {
    let table = forced(&[MutationCategory::NumberLiteral]);
    let cases = [
        ("x = 1.0.hex()\n", "x = (481).hex()\n"),
        ("x = 1 .bit_length()\n", "x = (481) .bit_length()\n"),
        ("x = (2).real + 3\n", "x = (481).real + 481\n"),
    ];
    for (source, expected) in cases {
        let text = mutate_with(&table, source);
        assert_eq!(text, expected);
        assert!(reparses(&text), "invalid output: {text:?}");
    }
}

#[test]
fn test_annotated_assignment_is_removed_as_a_statement() {
    let table = forced(&[MutationCategory::AnnAssign]);
    assert_eq!(
        mutate_with(&table, "x: int = 1\ny = 2\n"),
        "y = 2\n"
    );
}

#[test]
fn test_comments_survive_statement_removal() {
    let table = forced(&[MutationCategory::Assign]);
    let source = "# header\nx = 1  # note\nprint(x)\n";
    let text = mutate_with(&table, source);
    assert!(text.starts_with("# header\n"), "{text:?}");
    assert!(text.ends_with("print(x)\n"), "{text:?}");
    assert!(reparses(&text));
}

#[test]
fn test_all_categories_at_full_probability_preserve_other_code() {
    let table = OperatorTable::uniform(1.0).unwrap();
    let source = "\
import os

def greet(name):
    print(name.upper())
    return os.path.join(name, name)

class Empty:
    pass
";
    assert_eq!(mutate_with(&table, source), source);
}

#[test]
fn test_mutants_are_deterministic_and_isolated() {
    let engine = PythonLanguageEngine::new();
    let table = OperatorTable::uniform(0.5).unwrap();
    let sentinels = Sentinels::default();
    let generator = MutantGenerator::new(&engine, &table, &sentinels);
    let source = "\
def score(a, b):
    total = a * 2 + b
    if total > 10 and a != b:
        label = 'high'
    else:
        label = 'low'
    total -= 1
    return label, total / 3
";

    let first = generator.generate_all(source, 20).unwrap();
    let second = generator.generate_all(source, 20).unwrap();
    assert_eq!(first, second);

    for index in [0u64, 7, 19] {
        assert_eq!(
            generator.mutant(source, index).unwrap(),
            first[index as usize]
        );
    }

    let distinct: std::collections::HashSet<&str> =
        first.iter().map(|m| m.text.as_str()).collect();
    assert!(distinct.len() > 1, "all mutants were identical");
    for mutant in &first {
        assert!(reparses(&mutant.text), "invalid mutant:\n{}", mutant.text);
    }
}

#[test]
fn test_mutated_output_never_contains_unexpected_categories() {
    let table = forced(&[MutationCategory::Comparison]);
    let source = "x = 1 + 2\nif x < 3:\n    y = 'a'\n";
    let engine = PythonLanguageEngine::new();
    let sentinels = Sentinels::default();
    let mutant = MutantGenerator::new(&engine, &table, &sentinels)
        .mutant(source, 0)
        .unwrap();
    assert_eq!(mutant.text, "x = 1 + 2\nif x >= 3:\n    y = 'a'\n");
    assert_eq!(mutant.stats.total_applied(), 1);
    assert_eq!(mutant.stats.applied(MutationCategory::Comparison), 1);

    let program = engine.parse(&mutant.text).unwrap();
    let mut saw_ge = false;
    program.root.walk(&mut |node| {
        if let NodeKind::CompareOp(token) = &node.kind {
            saw_ge |= token.op == CompareOp::GtE;
        }
    });
    assert!(saw_ge);
}
