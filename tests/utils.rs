use svgrot::{rotate_str, RotateConfig};

pub fn rotate(input: &str, angle: f64) -> String {
    rotate_str(input, &RotateConfig { angle }).expect("Rotate failure")
}

pub fn compare(input: &str, angle: f64, expected: &str) {
    let output = rotate(input, angle);

    assert_eq!(output, expected);
}

#[allow(dead_code)]
pub fn contains(input: &str, angle: f64, expected: &str) {
    let output = rotate(input, angle);

    assert!(
        output.contains(expected),
        "\n {}\nnot found in\n {}",
        expected,
        output
    );
}
