use num::cast;

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}
