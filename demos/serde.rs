use interval_duration::Duration;
use serde::{Deserialize, Serialize};

fn main() {
    #[derive(Debug, Serialize, Deserialize)]
    struct DurationTest {
        pub duration: Duration,
    }

    let input = r#"{"duration":"3Y6M4D12H30m5.5S"}"#;
    let dur_test: DurationTest = serde_json::from_str(input).unwrap();
    let output = serde_json::to_string(&dur_test).unwrap();
    let expected = r#"{"duration":"3y6M4d12h30m5.5s"}"#;
    assert_eq!(expected, output);

    #[derive(Debug, Serialize, Deserialize)]
    struct DurationWithTest {
        #[serde(with = "interval_duration::serde")]
        pub duration: Duration,
    }

    let input = r#"{"duration":"0SP0D"}"#;
    let err = serde_json::from_str::<DurationWithTest>(input).unwrap_err();
    println!("{err}"); // => failed to parse duration: unexpected input at line 1 column 20
}
