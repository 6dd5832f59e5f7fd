use ndarray::{s, Array2, ArrayBase, Data, Ix2};
use num::Zero;

use crate::Error;

/// Allocates a zero filled `rows x cols` array.
///
/// Unlike `Array2::zeros`, an oversized request is reported as an error
/// instead of aborting the process.
pub(crate) fn try_zeros<A>((rows, cols): (usize, usize)) -> Result<Array2<A>, Error>
where
    A: Clone + Zero,
{
    let len = rows
        .checked_mul(cols)
        .ok_or(Error::BufferTooLarge { rows, cols })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|source| Error::Allocation { rows, cols, source })?;
    buffer.resize(len, A::zero());

    Ok(Array2::from_shape_vec((rows, cols), buffer)?)
}

/// Copies `data` into a zero buffer of size `working`, with its top-left
/// element at `offset`.
///
/// `offset + data.dim()` must fit inside `working`.
pub(crate) fn zero_extend<A, S>(
    data: &ArrayBase<S, Ix2>,
    working: (usize, usize),
    offset: (usize, usize),
) -> Result<Array2<A>, Error>
where
    A: Clone + Zero,
    S: Data<Elem = A>,
{
    let (rows, cols) = data.dim();
    debug_assert!(offset.0 + rows <= working.0 && offset.1 + cols <= working.1);

    let mut buffer = try_zeros(working)?;
    buffer
        .slice_mut(s![offset.0..offset.0 + rows, offset.1..offset.1 + cols])
        .assign(data);

    Ok(buffer)
}
