/// A conditional expression on one line.  `cargo fmt` spreads an
/// `if`/`else` expression over five lines, which buries the edge
/// clamps of the seam walk; this keeps each clamp readable as a
/// single rule.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
