use super::*;
use ndarray::prelude::*;
use num::Complex;

// ===== Known Results =====
// Hand-computed convolutions establish Conv as the trusted reference

mod full_mode {
    use super::*;

    #[test]
    fn ones_kernel() {
        let arr = array![[1, 2], [3, 4]];
        let kernel = array![[1, 1], [1, 1]];

        let res = arr.conv(&kernel, BorderMode::Full).unwrap();

        assert_eq!(res, array![[1, 3, 2], [4, 10, 6], [3, 7, 4]]);
    }

    #[test]
    fn kernel_is_flipped() {
        let arr = array![[1, 2, 3]];
        let kernel = array![[1, 0, -1]];

        let res = arr.conv(&kernel, BorderMode::Full).unwrap();

        assert_eq!(res, array![[1, 2, 2, -2, -3]]);
    }

    #[test]
    fn ones_pattern() {
        let arr = Array2::<i64>::ones((3, 3));
        let kernel = Array2::<i64>::ones((2, 2));

        let res = arr.conv(&kernel, BorderMode::Full).unwrap();

        assert_eq!(
            res,
            array![[1, 2, 2, 1], [2, 4, 4, 2], [2, 4, 4, 2], [1, 2, 2, 1]]
        );
    }

    #[test]
    fn kernel_larger_than_input() {
        let arr = array![[2]];
        let kernel = array![[1, 2], [3, 4], [5, 6]];

        let res = arr.conv(&kernel, BorderMode::Full).unwrap();

        assert_eq!(res, array![[2, 4], [6, 8], [10, 12]]);
    }

    #[test]
    fn commutative() {
        let a = array![[1, -2, 3], [0, 4, 1]];
        let b = array![[2, 1], [-1, 3], [5, 0]];

        assert_eq!(
            a.conv(&b, BorderMode::Full).unwrap(),
            b.conv(&a, BorderMode::Full).unwrap()
        );
    }
}

mod valid_mode {
    use super::*;

    #[test]
    fn kernel_is_flipped() {
        let arr = array![[1, 2, 3]];
        let kernel = array![[1, 0, -1]];

        let res = arr.conv(&kernel, BorderMode::Valid).unwrap();

        assert_eq!(res, array![[2]]);
    }

    #[test]
    fn ones_pattern() {
        let arr = Array2::<f64>::ones((3, 3));
        let kernel = Array2::<f64>::ones((2, 2));

        let res = arr.conv(&kernel, BorderMode::Valid).unwrap();

        assert_eq!(res, Array2::from_elem((2, 2), 4.));
    }

    #[test]
    fn asymmetric_2d() {
        let arr = array![[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]];
        let kernel = array![[1, 2], [3, 4]];

        let res = arr.conv(&kernel, BorderMode::Valid).unwrap();

        // out[i][j] = 4 * x[i][j] + 3 * x[i][j + 1] + 2 * x[i + 1][j] + x[i + 1][j + 1]
        assert_eq!(res, array![[26, 36, 46], [66, 76, 86]]);
    }

    #[test]
    fn same_size_kernel_gives_single_value() {
        let arr = array![[1, 2], [3, 4]];
        let kernel = array![[1, 1], [1, 2]];

        let res = arr.conv(&kernel, BorderMode::Valid).unwrap();

        assert_eq!(res, array![[11]]);
    }

    #[test]
    fn rejects_kernel_larger_than_input() {
        let arr = array![[1, 2], [3, 4]];
        let kernel = array![[1, 1, 1]];

        let res = arr.conv(&kernel, BorderMode::Valid);

        assert!(matches!(
            res,
            Err(Error::FilterLargerThanInput {
                input: (2, 2),
                filter: (1, 3)
            })
        ));
    }
}

#[test]
fn identity_kernel() {
    let arr = array![[1., 2., 3.], [4., 5., 6.]];
    let kernel = array![[1.]];

    for mode in [BorderMode::Valid, BorderMode::Full] {
        assert_eq!(arr.conv(&kernel, mode).unwrap(), arr);
    }
}

#[test]
fn works_on_views() {
    let arr = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
    let kernel = array![[0, 1], [1, 0]];

    let res = arr
        .slice(s![.., 1..])
        .conv(&kernel.view(), BorderMode::Valid)
        .unwrap();

    // out[i][j] = x[i + 1][j] + x[i][j + 1] on the last two columns
    assert_eq!(res, array![[3 + 5], [6 + 8]]);
}

#[test]
fn complex_elements() {
    let arr = array![[Complex::new(1., 1.), Complex::new(2., 0.)]];
    let kernel = array![[Complex::new(0., 1.)]];

    let res = arr.conv(&kernel, BorderMode::Full).unwrap();

    assert_eq!(res, array![[Complex::new(-1., 1.), Complex::new(0., 2.)]]);
}

#[test]
fn empty_operand_is_rejected() {
    let arr = Array2::<i32>::zeros((0, 3));
    let kernel = array![[1]];

    assert!(matches!(
        arr.conv(&kernel, BorderMode::Full),
        Err(Error::EmptyOperand { .. })
    ));
}
