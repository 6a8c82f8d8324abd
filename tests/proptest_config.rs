use image_cropper::config::{parse_crop_config, parse_crop_spec};
use image_cropper::{CropSpec, InvalidConfig};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(256);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Runs of spaces and tabs, possibly empty.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

/// Inserts arbitrary spaces and tabs between every character of `line`.
fn arb_spaced(line: String) -> impl Strategy<Value = String> {
    let len = line.chars().count();
    prop::collection::vec(arb_blank(), len + 1).prop_map(move |gaps| {
        let mut out = String::new();
        for (ch, gap) in line.chars().zip(&gaps) {
            out.push_str(gap);
            out.push(ch);
        }
        out.push_str(&gaps[len]);
        out
    })
}

fn arb_spec() -> impl Strategy<Value = CropSpec> {
    (0u32..10_000, 0u32..10_000, 0u32..10_000, 0u32..10_000)
        .prop_map(|(x, y, w, h)| CropSpec::new(x, y, w, h))
}

/// The four config lines for `spec`, shuffled and spaced out, each preceded
/// by a blank or whitespace-only line.
fn arb_config_lines(spec: CropSpec) -> impl Strategy<Value = Vec<String>> {
    let spaced: Vec<_> = [
        format!("X={}", spec.x),
        format!("Y={}", spec.y),
        format!("Width={}", spec.width),
        format!("Height={}", spec.height),
    ]
    .into_iter()
    .map(arb_spaced)
    .collect();

    (spaced.prop_shuffle(), prop::collection::vec(arb_blank(), 4)).prop_map(|(lines, blanks)| {
        blanks
            .into_iter()
            .zip(lines)
            .flat_map(|(blank, line)| [blank, line])
            .collect()
    })
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn any_order_and_spacing_parses_to_same_rect(
        (spec, lines) in arb_spec().prop_flat_map(|spec| (Just(spec), arb_config_lines(spec)))
    ) {
        let parsed = parse_crop_spec(&lines).expect("generated config is valid");
        prop_assert_eq!(parsed, spec);

        let rect = parse_crop_config(&lines.join("\n")).expect("generated config is valid");
        prop_assert_eq!(
            rect.to_ltrb(),
            (spec.x, spec.y, spec.x + spec.width, spec.y + spec.height)
        );
    }

    #[test]
    fn last_assignment_wins(first in 0u32..1000, second in 0u32..1000) {
        let lines = [
            format!("X={first}"),
            "Y=0".to_string(),
            "Width=1".to_string(),
            "Height=1".to_string(),
            format!("X = {second}"),
        ];
        prop_assert_eq!(parse_crop_spec(&lines).map(|s| s.x), Ok(second));
    }

    #[test]
    fn non_digit_value_is_rejected(
        key in prop::sample::select(vec!["X", "Y", "Width", "Height"]),
        value in "[0-9]{0,3}[a-zA-Z.+-][0-9a-z]{0,3}"
    ) {
        let mut lines = vec!["X=1", "Y=1", "Width=1", "Height=1"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();
        lines.push(format!("{key} = {value}"));
        prop_assert_eq!(parse_crop_spec(&lines), Err(InvalidConfig));
    }

    #[test]
    fn parser_never_panics(text in "\\PC{0,200}") {
        let _ = parse_crop_config(&text);
    }
}
