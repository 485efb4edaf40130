// https://stackoverflow.com/questions/30856285/assert-eq-with-floating-point-numbers-and-delta
#[macro_export]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        if ($x - $y).abs() > $d {
            panic!("Values {} and {} differ by more than {}", $x, $y, $d);
        }
    };
}

#[allow(dead_code)]
pub const DEFAULT_DELTA: f64 = 0.0001;
