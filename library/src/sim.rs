use std::io::Write;

use crate::io::InputStream;
use crate::reversible::ReversibleSeq;

// One batch run: "n q" followed by q commands, one answer line per query.
pub fn solve(input: &mut impl InputStream, output: &mut impl Write) {
    let n: usize = input.value();
    let q: usize = input.value();

    let mut seq = ReversibleSeq::new(n);
    for _ in 0..q {
        let cmd: u8 = input.value();
        match cmd {
            1 => {
                let x: usize = input.value();
                let y: i64 = input.value();
                seq.assign(x, y);
            }
            2 => seq.reverse(),
            3 => {
                let x: usize = input.value();
                writeln!(output, "{}", seq.get(x)).unwrap();
            }
            _ => unreachable!(),
        }
    }
}
