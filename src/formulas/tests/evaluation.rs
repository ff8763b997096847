mod evaluation_tests {
    use crate::datastructures::Assignment;
    use crate::formulas::ToFormula;
    use crate::util::test_util::F;

    fn ass(ff: &F) -> Assignment {
        Assignment::from_variables(
            &[ff.A.as_variable().unwrap(), ff.B.as_variable().unwrap(), ff.C.as_variable().unwrap()],
            &[ff.X.as_variable().unwrap(), ff.Y.as_variable().unwrap()],
        )
    }

    #[test]
    fn test_constant_eval() {
        let ff = F::new();
        assert!(ff.f.evaluate(ff.TRUE, &ass(&ff)));
        assert!(!ff.f.evaluate(ff.FALSE, &ass(&ff)));
    }

    #[test]
    fn test_variable_eval() {
        let ff = F::new();
        assert!(ff.f.evaluate(ff.A, &ass(&ff)));
        assert!(!ff.f.evaluate(ff.NA, &ass(&ff)));
        assert!(!ff.f.evaluate(ff.X, &ass(&ff)));
        assert!(ff.f.evaluate(ff.NX, &ass(&ff)));
    }

    #[test]
    fn test_unassigned_variables_are_false() {
        let ff = F::new();
        let f = &ff.f;
        assert!(!f.evaluate(f.variable("unknown"), &ass(&ff)));
        assert!(f.evaluate("~unknown".to_formula(f), &ass(&ff)));
        assert!(!f.evaluate(f.variable("z"), &Assignment::default()));
    }

    #[test]
    fn test_not_eval() {
        let ff = F::new();
        assert!(!ff.f.evaluate(ff.NOT1, &ass(&ff)));
        assert!(ff.f.evaluate(ff.NOT2, &ass(&ff)));
        assert!(ff.f.evaluate("~~a".to_formula(&ff.f), &ass(&ff)));
    }

    #[test]
    fn test_binary_eval() {
        let ff = F::new();
        let f = &ff.f;
        assert!(f.evaluate(ff.AND1, &ass(&ff)));
        assert!(!f.evaluate(ff.AND2, &ass(&ff)));
        assert!(!f.evaluate(ff.OR1, &ass(&ff)));
        assert!(f.evaluate(ff.OR2, &ass(&ff)));

        assert!(f.evaluate(ff.IMP1, &ass(&ff)));
        assert!(f.evaluate(ff.IMP2, &ass(&ff)));
        assert!(!f.evaluate(ff.IMP3, &ass(&ff)));
        assert!(f.evaluate("x => a".to_formula(f), &ass(&ff)));

        assert!(f.evaluate(ff.EQ1, &ass(&ff)));
        assert!(!f.evaluate("a <=> x".to_formula(f), &ass(&ff)));

        assert!(f.evaluate(ff.XOR1, &ass(&ff)));
        assert!(!f.evaluate("a ^ b".to_formula(f), &ass(&ff)));

        assert!(!f.evaluate(ff.NAND1, &ass(&ff)));
        assert!(f.evaluate("a ~& x".to_formula(f), &ass(&ff)));

        assert!(!f.evaluate(ff.NOR1, &ass(&ff)));
        assert!(f.evaluate("x ~| y".to_formula(f), &ass(&ff)));
    }

    #[test]
    fn test_nested_eval() {
        let ff = F::new();
        let f = &ff.f;
        assert!(f.evaluate("(a & b) => (x | c)".to_formula(f), &ass(&ff)));
        assert!(!f.evaluate("(a <=> x) | (b ^ c)".to_formula(f), &ass(&ff)));
        assert!(f.evaluate("~(a ~& b) & ($true ^ x)".to_formula(f), &ass(&ff)));
    }
}
