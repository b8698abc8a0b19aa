use ndarray::ArrayView2;

use crate::{MlErr, Result};

/// The decoded parameters of a policy network, borrowed from the flat parameter slice.
#[derive(Debug, Clone, Copy)]
pub struct PolicyParams<'a> {
    /// Input to hidden weights, `input_size x hidden_size`.
    pub w1: ArrayView2<'a, f64>,
    /// Hidden biases, `1 x hidden_size`.
    pub b1: ArrayView2<'a, f64>,
    /// Hidden to output weights, `hidden_size x output_size`.
    pub w2: ArrayView2<'a, f64>,
    /// Output biases, `1 x output_size`.
    pub b2: ArrayView2<'a, f64>,
}

/// The layout of a two layer network's parameters inside a flat vector.
///
/// The flat vector is the concatenation, in this order, of `W1`, `b1`, `W2` and `b2`, each
/// flattened row by row. Every component that reads or writes parameters goes through this
/// type, so the slice boundaries are only ever computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyLayout {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
}

impl PolicyLayout {
    /// Creates a new `PolicyLayout`.
    ///
    /// # Arguments
    /// * `input_size` - The dimension of an observation.
    /// * `hidden_size` - The amount of hidden units.
    /// * `output_size` - The amount of discrete actions.
    ///
    /// # Returns
    /// A new `PolicyLayout` instance.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Self {
        Self {
            input_size,
            hidden_size,
            output_size,
        }
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// The shapes of `W1`, `b1`, `W2` and `b2`, in flat order.
    pub fn shapes(&self) -> [(usize, usize); 4] {
        let &Self {
            input_size,
            hidden_size,
            output_size,
        } = self;

        [
            (input_size, hidden_size),
            (1, hidden_size),
            (hidden_size, output_size),
            (1, output_size),
        ]
    }

    /// Returns the total amount of parameters.
    pub fn size(&self) -> usize {
        self.shapes().iter().map(|(rows, cols)| rows * cols).sum()
    }

    /// Concatenates the four parameter arrays into a flat vector.
    ///
    /// # Arguments
    /// * `w1` - Input to hidden weights.
    /// * `b1` - Hidden biases.
    /// * `w2` - Hidden to output weights.
    /// * `b2` - Output biases.
    ///
    /// # Returns
    /// The flat parameter vector, or an error if any array doesn't have its declared shape.
    pub fn encode(
        &self,
        w1: ArrayView2<f64>,
        b1: ArrayView2<f64>,
        w2: ArrayView2<f64>,
        b2: ArrayView2<f64>,
    ) -> Result<Vec<f64>> {
        let parts = [("W1", w1), ("b1", b1), ("W2", w2), ("b2", b2)];
        let mut params = Vec::with_capacity(self.size());

        for ((what, part), shape) in parts.into_iter().zip(self.shapes()) {
            check_shape(what, part.dim(), shape)?;
            params.extend(part.iter().copied());
        }

        Ok(params)
    }

    /// Views a flat parameter slice as the four parameter arrays.
    ///
    /// # Arguments
    /// * `params` - The flat parameters, exactly `size()` long.
    ///
    /// # Returns
    /// The borrowed parameter arrays, or an error if the slice has the wrong length.
    pub fn decode<'a>(&self, params: &'a [f64]) -> Result<PolicyParams<'a>> {
        let expected = self.size();
        if params.len() != expected {
            return Err(MlErr::SizeMismatch {
                what: "policy parameters",
                got: params.len(),
                expected,
            });
        }

        let [w1, b1, w2, b2] = self.shapes();
        let mut rest = params;
        let w1 = take_view(&mut rest, w1)?;
        let b1 = take_view(&mut rest, b1)?;
        let w2 = take_view(&mut rest, w2)?;
        let b2 = take_view(&mut rest, b2)?;

        Ok(PolicyParams { w1, b1, w2, b2 })
    }
}

fn check_shape(what: &'static str, got: (usize, usize), expected: (usize, usize)) -> Result<()> {
    if got.0 != expected.0 {
        return Err(MlErr::SizeMismatch {
            what,
            got: got.0,
            expected: expected.0,
        });
    }

    if got.1 != expected.1 {
        return Err(MlErr::SizeMismatch {
            what,
            got: got.1,
            expected: expected.1,
        });
    }

    Ok(())
}

fn take_view<'a>(rest: &mut &'a [f64], shape: (usize, usize)) -> Result<ArrayView2<'a, f64>> {
    let len = shape.0 * shape.1;
    let (raw, tail) = rest.split_at(len);
    *rest = tail;

    ArrayView2::from_shape(shape, raw).map_err(|_| MlErr::SizeMismatch {
        what: "policy parameters",
        got: raw.len(),
        expected: len,
    })
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    fn layout() -> PolicyLayout {
        PolicyLayout::new(4, 8, 2)
    }

    #[test]
    fn size() {
        assert_eq!(layout().size(), 4 * 8 + 8 + 8 * 2 + 2);
        assert_eq!(PolicyLayout::new(1, 1, 1).size(), 4);
    }

    #[test]
    fn roundtrip_arrays() {
        let layout = PolicyLayout::new(2, 3, 2);
        let w1 = array![[1., 2., 3.], [4., 5., 6.]];
        let b1 = array![[7., 8., 9.]];
        let w2 = array![[10., 11.], [12., 13.], [14., 15.]];
        let b2 = array![[16., 17.]];

        let params = layout
            .encode(w1.view(), b1.view(), w2.view(), b2.view())
            .unwrap();
        let expected: Vec<f64> = (1..=17).map(|x| x as f64).collect();
        assert_eq!(params, expected);

        let decoded = layout.decode(&params).unwrap();
        assert_eq!(decoded.w1, w1);
        assert_eq!(decoded.b1, b1);
        assert_eq!(decoded.w2, w2);
        assert_eq!(decoded.b2, b2);
    }

    #[test]
    fn roundtrip_flat() {
        let layout = layout();
        let params: Vec<f64> = (0..layout.size()).map(|i| (i as f64).sin()).collect();

        let p = layout.decode(&params).unwrap();
        let encoded = layout.encode(p.w1, p.b1, p.w2, p.b2).unwrap();

        assert_eq!(encoded, params);
    }

    #[test]
    fn transposed_input_is_flattened_logically() {
        let layout = PolicyLayout::new(2, 2, 1);
        let w1 = array![[1., 3.], [2., 4.]];
        let w1_t = w1.t();

        let params = layout
            .encode(
                w1_t,
                Array2::zeros((1, 2)).view(),
                Array2::zeros((2, 1)).view(),
                Array2::zeros((1, 1)).view(),
            )
            .unwrap();

        assert_eq!(&params[..4], &[1., 2., 3., 4.]);
    }

    #[test]
    fn decode_wrong_length() {
        let layout = layout();

        for len in [0, layout.size() - 1, layout.size() + 1] {
            let params = vec![0.; len];
            let err = layout.decode(&params).unwrap_err();

            assert_eq!(
                err,
                MlErr::SizeMismatch {
                    what: "policy parameters",
                    got: len,
                    expected: layout.size(),
                }
            );
        }
    }

    #[test]
    fn encode_wrong_shape() {
        let layout = layout();
        let w1 = Array2::zeros((8, 4));
        let b1 = Array2::zeros((1, 8));
        let w2 = Array2::zeros((8, 2));
        let b2 = Array2::zeros((1, 2));

        let err = layout
            .encode(w1.view(), b1.view(), w2.view(), b2.view())
            .unwrap_err();

        assert_eq!(
            err,
            MlErr::SizeMismatch {
                what: "W1",
                got: 8,
                expected: 4,
            }
        );
    }
}
