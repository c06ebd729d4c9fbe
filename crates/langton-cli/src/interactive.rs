use crate::{Args, DirectionArg};
use anyhow::{bail, Result};
use langton_core::Pattern;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// Prompt until the user enters an integer inside `range`. Fails only when
/// stdin closes.
fn read_input(message: &str, range: RangeInclusive<usize>) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        println!("{message}");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("stdin closed before configuration finished");
        }
        if let Ok(value) = line.trim().parse::<usize>() {
            if range.contains(&value) {
                return Ok(value);
            }
        }
        println!("This is not a valid input, please input one of the following options:");
    }
}

/// The original prompt flow: pattern menu, start column and row, direction
/// menu, then updates per frame. Grid dimensions stay as given on the
/// command line.
pub fn configure(args: &mut Args) -> Result<()> {
    println!("Welcome to this simulation of Langton's ant");

    let selector = read_input(
        "Please choose one of the following starting configurations by entering the number in front of the option\n\
         (1) all white\n(2) all black\n(3) checker board\n(4) horizontal stripes\n(5) random",
        1..=5,
    )?;
    args.pattern = Pattern::from_selector(selector as u8)?.into();

    args.col = Some(read_input(
        &format!("Please choose the starting column from 0 to {}", args.width - 1),
        0..=args.width - 1,
    )?);
    args.row = Some(read_input(
        &format!("Please choose the starting row from 0 to {}", args.height - 1),
        0..=args.height - 1,
    )?);

    let direction = read_input(
        "Please choose the starting direction\n(1) North\n(2) West\n(3) South\n(4) East",
        1..=4,
    )?;
    args.direction = match direction {
        1 => DirectionArg::North,
        2 => DirectionArg::West,
        3 => DirectionArg::South,
        _ => DirectionArg::East,
    };

    args.updates_per_frame = read_input(
        "Please choose the number of updates per frame between 1 and 100 (1=realtime)",
        1..=100,
    )?;
    Ok(())
}
