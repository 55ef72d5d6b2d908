use interval_duration::Duration;
// `Duration::from_str` requires `std::str::FromStr`
use std::str::FromStr;

fn main() {
    let dur = Duration::ZERO;
    println!("{}", dur.to_nanos()); // => "0"
    println!("{}", dur); // => "0s"

    let dur = Duration::from_nanos(94 * 60 * 1_000_000_000);
    println!("{:?}", dur); // => "Duration { years: 0.0, .., hours: 1.0, minutes: 34.0, .. }"
    println!("{}", dur); // => "1h34m"

    let dur = Duration::from_str("3Y6M4D12H30m5.5S");
    println!("{}", dur.unwrap()); // => "3y6M4d12h30m5.5s"

    let dur = str::parse::<Duration>("5M");
    println!("{}", dur.unwrap().months); // => "5"

    let dur: Result<Duration, _> = "-90m".try_into();
    println!("{}", dur.unwrap().to_nanos()); // => "-5400000000000"

    println!("{}", interval_duration::format(72 * 3_600_000_000_000)); // => "3d"

    let dur = Duration::parse_strict("5s5y");
    println!("{:?}", dur); // => "Err(MisorderedUnit(Years))"
}
