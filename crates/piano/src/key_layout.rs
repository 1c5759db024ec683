/// Index of the key under horizontal position `x`.
///
/// Keys share the window width equally, left to right in binding order.
/// Positions outside `[0, width)` hit nothing.
pub fn key_index_at(x: f64, width: f64, key_count: usize) -> Option<usize> {
    // An empty or NaN width makes the range empty.
    if key_count == 0 || !(0.0..width).contains(&x) {
        return None;
    }

    let index = (x * key_count as f64 / width).floor() as usize;
    Some(index.min(key_count - 1))
}
