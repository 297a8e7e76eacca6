//! Property-based tests using proptest.
//!
//! These tests verify invariants of the elementwise arithmetic and the
//! text format.

use matriz::prelude::*;
use proptest::prelude::*;

// Strategy for generating i32 matrices of a fixed shape
fn i32_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-1000i32..1000, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("test data is valid"))
}

// Strategy for generating f64 matrices of a fixed shape
fn f64_matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("test data is valid"))
}

// Strategy for a same-shaped pair of i32 matrices with a random shape
fn i32_pair_strategy() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
        (
            i32_matrix_strategy(rows, cols),
            i32_matrix_strategy(rows, cols),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Arithmetic properties
    #[test]
    fn addition_is_commutative((a, b) in i32_pair_strategy()) {
        prop_assert_eq!(
            a.add(&b).expect("same shape"),
            b.add(&a).expect("same shape")
        );
    }

    #[test]
    fn multiplication_is_commutative((a, b) in i32_pair_strategy()) {
        prop_assert_eq!(
            a.mul(&b).expect("same shape"),
            b.mul(&a).expect("same shape")
        );
    }

    #[test]
    fn add_then_sub_restores_original((a, b) in i32_pair_strategy()) {
        // Wrapping arithmetic makes subtraction an exact inverse of
        // addition, overflow included.
        let round_trip = a.add(&b).expect("same shape").sub(&b).expect("same shape");
        prop_assert_eq!(round_trip, a);
    }

    #[test]
    fn float_addition_is_commutative(a in f64_matrix_strategy(4, 3), b in f64_matrix_strategy(4, 3)) {
        prop_assert_eq!(
            a.add(&b).expect("same shape"),
            b.add(&a).expect("same shape")
        );
    }

    #[test]
    fn combine_preserves_shape_and_kind((a, b) in i32_pair_strategy()) {
        let sum = a.add(&b).expect("same shape");
        prop_assert_eq!(sum.shape(), a.shape());
        prop_assert_eq!(sum.kind(), a.kind());
    }

    #[test]
    fn mismatched_shapes_always_rejected(
        r1 in 1usize..6, c1 in 1usize..6,
        r2 in 1usize..6, c2 in 1usize..6,
    ) {
        prop_assume!((r1, c1) != (r2, c2));
        let a = Matrix::filled(r1, c1, 1).expect("valid shape");
        let b = Matrix::filled(r2, c2, 1).expect("valid shape");
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            let err = a.combine(&b, op).unwrap_err();
            prop_assert!(
                matches!(err, MatrizError::ShapeMismatch { .. }),
                "expected ShapeMismatch, got {:?}",
                err
            );
        }
    }

    // Broadcast properties
    #[test]
    fn scalar_broadcast_matches_filled_combine(m in i32_matrix_strategy(3, 4), s in -1000i32..1000) {
        let filled = Matrix::filled(3, 4, s).expect("valid shape");
        prop_assert_eq!(
            m.add_scalar(s).expect("same kind"),
            m.combine(&filled, Op::Add).expect("same shape")
        );
        prop_assert_eq!(
            m.mul_scalar(s).expect("same kind"),
            m.combine(&filled, Op::Mul).expect("same shape")
        );
    }

    #[test]
    fn scalar_left_matches_filled_on_the_left(m in i32_matrix_strategy(3, 3), s in -1000i32..1000) {
        let filled = Matrix::filled(3, 3, s).expect("valid shape");
        prop_assert_eq!(
            m.scalar_sub(s).expect("same kind"),
            filled.sub(&m).expect("same shape")
        );
    }

    #[test]
    fn sub_scalar_then_add_scalar_restores(m in i32_matrix_strategy(2, 5), s in -1000i32..1000) {
        let round_trip = m
            .sub_scalar(s)
            .expect("same kind")
            .add_scalar(s)
            .expect("same kind");
        prop_assert_eq!(round_trip, m);
    }

    #[test]
    fn division_by_nonzero_scalar_succeeds(m in i32_matrix_strategy(3, 3), s in 1i32..1000) {
        let q = m.div_scalar(s).expect("nonzero divisor");
        prop_assert_eq!(q.shape(), (3, 3));
    }

    #[test]
    fn division_rejects_a_zero_cell_anywhere(
        m in i32_matrix_strategy(3, 3),
        divisors in proptest::collection::vec(1i32..1000, 9),
        hole in 0usize..9,
    ) {
        let mut divisors = divisors;
        divisors[hole] = 0;
        let d = Matrix::from_vec(3, 3, divisors).expect("valid");
        let err = m.div(&d).unwrap_err();
        prop_assert!(matches!(err, MatrizError::DivisionByZero));
    }

    // Text format properties
    #[test]
    fn text_round_trip_i32(m in i32_matrix_strategy(3, 4)) {
        let text = write_matrix(&m);
        let back = parse_matrix(&text, NumericKind::I32).expect("own output parses");
        prop_assert_eq!(back, m);
    }

    #[test]
    fn text_round_trip_f64(m in f64_matrix_strategy(2, 3)) {
        let text = write_matrix(&m);
        let back = parse_matrix(&text, NumericKind::F64).expect("own output parses");
        prop_assert_eq!(back, m);
    }

    #[test]
    fn written_text_has_three_lines(m in i32_matrix_strategy(4, 2)) {
        let text = write_matrix(&m);
        prop_assert_eq!(text.lines().count(), 3);
        prop_assert!(text.ends_with('\n'));
    }

    // Builder properties
    #[test]
    fn builder_matches_from_vec(data in proptest::collection::vec(-1000i64..1000, 12)) {
        let direct = Matrix::from_vec(3, 4, data.clone()).expect("valid");
        let mut builder = MatrixBuilder::new(3, 4, NumericKind::I64).expect("valid shape");
        for (idx, value) in data.into_iter().enumerate() {
            builder.set(idx / 4, idx % 4, value).expect("in bounds, same kind");
        }
        prop_assert_eq!(builder.finish().expect("fully populated"), direct);
    }

    #[test]
    fn builder_missing_one_cell_never_finishes(
        row in 0usize..3,
        col in 0usize..4,
    ) {
        let mut builder = MatrixBuilder::new(3, 4, NumericKind::I32).expect("valid shape");
        for r in 0..3 {
            for c in 0..4 {
                if (r, c) != (row, col) {
                    builder.set(r, c, 7).expect("in bounds, same kind");
                }
            }
        }
        prop_assert!(!builder.is_complete());
        let err = builder.finish().unwrap_err();
        prop_assert!(
            matches!(err, MatrizError::EmptyCell { .. }),
            "expected EmptyCell, got {:?}",
            err
        );
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_one_by_one_matrix_ops() {
        let a = Matrix::from_vec(1, 1, vec![6]).expect("valid");
        let b = Matrix::from_vec(1, 1, vec![3]).expect("valid");
        assert_eq!(a.div(&b).expect("valid"), Matrix::from_vec(1, 1, vec![2]).expect("valid"));
    }

    #[test]
    fn test_zero_filled_matrix_is_additive_identity() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).expect("valid");
        let zeros = Matrix::filled(2, 2, 0).expect("valid shape");
        assert_eq!(m.add(&zeros).expect("same shape"), m);
        assert_eq!(zeros.add(&m).expect("same shape"), m);
    }

    #[test]
    fn test_one_filled_matrix_is_multiplicative_identity() {
        let m = Matrix::from_vec(2, 2, vec![1.5, -2.5, 0.0, 4.0]).expect("valid");
        let ones = Matrix::filled(2, 2, 1.0).expect("valid shape");
        assert_eq!(m.mul(&ones).expect("same shape"), m);
    }
}
