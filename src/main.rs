use std::cmp::Ordering;

use rpmutils::vercmp;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (first, second) = match args.as_slice() {
        [first, second] => (first, second),
        _ => {
            eprintln!("usage: rpmutils <version1> <version2>");
            std::process::exit(2)
        },
    };
    match vercmp(first, second) {
        Ordering::Greater => println!("1"),
        Ordering::Equal => println!("0"),
        Ordering::Less => println!("-1")
    }
}
