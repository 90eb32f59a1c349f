use std::io::Write;

use reversible_seq::io::read_stdin_to_end;
use reversible_seq::sim::solve;

fn main() {
    let input_buf = read_stdin_to_end();
    let mut input: &[u8] = &input_buf[..];

    let mut output_buf = Vec::<u8>::new();
    solve(&mut input, &mut output_buf);

    std::io::stdout().write_all(&output_buf[..]).unwrap();
}
