use interval_duration::Duration;
use nom::{
    bytes::complete::{tag, take_till1},
    combinator::opt,
    multi::fold_many1,
    sequence::terminated,
    Parser,
};

fn main() {
    // Basic usage
    let input = "1d12h";
    let (_, dur) = interval_duration::nom::duration.parse(input).unwrap();
    println!("{:?}", dur); // => Duration { .., days: 1.0, hours: 12.0, .. }
    println!("{}", dur); // => 1d12h

    // Using with other nom combinators
    let input = "1y 6M 2w3d -90m";
    let (_, arr) = fold_many1(
        terminated(take_till1(|c: char| c.is_ascii_whitespace()), opt(tag(" ")))
            .and_then(interval_duration::nom::duration_strict),
        Vec::new,
        |mut arr, dur: Duration| {
            arr.push(dur);
            arr
        },
    )
    .parse(input)
    .unwrap();
    /*
     * 1y
     * 6M
     * 2w3d
     * -90m
     */
    arr.iter().for_each(|dur| println!("{dur}"));
}
