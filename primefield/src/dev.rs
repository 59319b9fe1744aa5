//! Development-related functionality: test and benchmark macros shared by the
//! field and curve crates.

/// Write a series of `criterion`-based benchmarks for elements of a field.
///
/// `$fe_a` and `$fe_b` must belong to the same field; `$rng` seeds the square
/// root benchmark.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr, $rng:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x.add(&y)));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x.sub(&y)));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x.multiply(&y)));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a.square());
            let mut rng = $rng;
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt(&mut rng)));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement identity and ring law tests for the elements of a field.
#[macro_export]
macro_rules! test_field_axioms {
    ($field:expr) => {
        #[test]
        fn zero_is_additive_identity() {
            let field = $field;
            let zero = field.zero();
            let one = field.one();
            assert_eq!(zero.add(&zero).unwrap(), zero);
            assert_eq!(one.add(&zero).unwrap(), one);
            assert_eq!(one.multiply(&zero).unwrap(), zero);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let field = $field;
            let one = field.one();
            assert_eq!(one.multiply(&one).unwrap(), one);
            assert_eq!(one.square(), one);
            assert_eq!(one.pow(u128::MAX), one);
        }

        #[test]
        fn ring_laws() {
            let field = $field;

            ::proptest::proptest!(|(
                a in ::proptest::prelude::any::<u128>(),
                b in ::proptest::prelude::any::<u128>(),
                c in ::proptest::prelude::any::<u128>()
            )| {
                let (a, b, c) = (field.reduce(a), field.reduce(b), field.reduce(c));

                ::proptest::prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
                ::proptest::prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
                ::proptest::prop_assert_eq!(
                    a.add(&b).unwrap().add(&c).unwrap(),
                    a.add(&b.add(&c).unwrap()).unwrap()
                );
                ::proptest::prop_assert_eq!(
                    a.multiply(&b).unwrap().multiply(&c).unwrap(),
                    a.multiply(&b.multiply(&c).unwrap()).unwrap()
                );
                ::proptest::prop_assert_eq!(
                    a.multiply(&b.add(&c).unwrap()).unwrap(),
                    a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap()
                );
            });
        }

        #[test]
        fn derived_operations() {
            let field = $field;

            ::proptest::proptest!(|(
                a in ::proptest::prelude::any::<u128>(),
                b in ::proptest::prelude::any::<u128>()
            )| {
                let (a, b) = (field.reduce(a), field.reduce(b));

                ::proptest::prop_assert_eq!(a.sub(&b).unwrap().add(&b).unwrap(), a);
                ::proptest::prop_assert!(a.add(&-a).unwrap().is_zero());
                ::proptest::prop_assert_eq!(a.double(), a.add(&a).unwrap());
                ::proptest::prop_assert_eq!(a.square(), a.multiply(&a).unwrap());
                ::proptest::prop_assert_eq!(a.pow(3), a.square().multiply(&a).unwrap());
                ::proptest::prop_assert!(a.equals(&a).unwrap());
            });
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($field:expr) => {
        #[test]
        fn invert() {
            let field = $field;
            let one = field.one();
            assert_eq!(one.invert().unwrap(), one);

            let three = one.add(&one).unwrap().add(&one).unwrap();
            let inv_three = three.invert().unwrap();
            assert_eq!(three.multiply(&inv_three).unwrap(), one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three.multiply(&inv_minus_three).unwrap(), -one);
        }

        #[test]
        fn invert_nonzero() {
            let field = $field;

            ::proptest::proptest!(|(
                a in ::proptest::prelude::any::<u128>(),
                b in ::proptest::prelude::any::<u128>()
            )| {
                let (a, b) = (field.reduce(a), field.reduce(b));
                ::proptest::prop_assume!(!a.is_zero());

                let inv = a.invert().unwrap();
                ::proptest::prop_assert!(a.multiply(&inv).unwrap().is_one());
                ::proptest::prop_assert_eq!(b.divide(&a).unwrap().multiply(&a).unwrap(), b);
            });
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($field:expr, $rng:expr) => {
        #[test]
        fn sqrt_small_squares() {
            let field = $field;
            let mut rng = $rng;

            for n in [1u128, 4, 9, 16, 25, 36, 49, 64] {
                let fe = field.reduce(n);
                if fe.is_zero() {
                    continue;
                }
                let roots = fe.sqrt(&mut rng).unwrap();
                assert_eq!(roots.first().square(), fe);
                assert_eq!(roots.second(), -roots.first());
            }
        }

        #[test]
        fn sqrt_of_square() {
            let field = $field;

            ::proptest::proptest!(|(a in ::proptest::prelude::any::<u128>())| {
                let mut rng = $rng;
                let a = field.reduce(a);
                ::proptest::prop_assume!(!a.is_zero());

                let roots = a.square().sqrt(&mut rng).unwrap();
                ::proptest::prop_assert!(roots.contains(&a));
                ::proptest::prop_assert!(roots.contains(&-a));
            });
        }
    };
}
