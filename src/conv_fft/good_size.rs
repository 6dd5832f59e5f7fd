//! Rounds transform lengths up to sizes that `rustfft` handles quickly.

/// A length `>= n` with prime factors 2, 3 and 5 only, found by shrinking
/// the next power of two by factors of 3/4 and then 5/6.
fn good_size_cc(n: usize) -> usize {
    let mut best_fac = n.next_power_of_two();

    for (num, den) in [(3, 4), (5, 6)] {
        loop {
            let new_fac = best_fac / den * num;
            match new_fac.cmp(&n) {
                std::cmp::Ordering::Less => break,
                std::cmp::Ordering::Equal => return n,
                std::cmp::Ordering::Greater => best_fac = new_fac,
            }
        }
    }

    best_fac
}

/// Same as [`good_size_cc`] for the real-to-complex axis, whose parity is
/// kept so that an even length requested through `pad_last_dim` stays even.
fn good_size_rr(n: usize) -> usize {
    let res = n % 2;
    let n = n / 2;

    good_size_cc(n) * 2 + res
}

pub(crate) fn compute((rows, cols): (usize, usize)) -> (usize, usize) {
    (good_size_cc(rows), good_size_rr(cols))
}
