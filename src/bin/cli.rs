//! blheli2rtttl CLI — interactive BLHELI_32 to RTTTL conversion.
//!
//! Prompts for a song name and speed, then up to four melodies (one per ESC
//! channel), prints each RTTTL result with its invalid symbols, and repeats
//! until the user declines to continue.

use std::io::{self, BufRead, Write};

use blheli_rtttl::{convert_blheli32_to_rtttl, ConversionSettings};

const MELODY_FORMAT_HINT: &str = "Melody formatting is: \n\
    \"A#58 P8 G516\" OR\n\
    \"A#5 8 P4 G5 16\" OR\n\
    \"A#5 1/8 P 1/8 G5 1/16\" OR mixed\n\
    Additional spaces are removed";

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to the BLHELI_32 to RTTTL converter!");

    loop {
        println!("----------------------------------------");
        let song_name =
            match prompt(&mut input, "Enter your melody name (default/blank is \"test\"): ")? {
                Some(name) => name,
                None => break,
            };
        let speed = match prompt(&mut input, "Enter your speed (default/blank is 210): ")? {
            Some(speed) => speed,
            None => break,
        };
        println!("{}", MELODY_FORMAT_HINT);

        let mut melodies = Vec::new();
        for esc in 1..=4 {
            let question = format!("Enter your melody for ESC{}: (type \"exit\" to exit) ", esc);
            let melody = match prompt(&mut input, &question)? {
                Some(melody) if !melody.is_empty() && melody != "exit" => melody,
                _ => break,
            };
            let settings = ConversionSettings {
                song_name: Some(song_name.clone()),
                speed: Some(speed.clone()),
                ..ConversionSettings::default()
            };
            let result = convert_blheli32_to_rtttl(&melody, Some(settings));
            println!("Invalid symbols: {}", result.invalid_tokens.join(", "));
            println!("\nESC{}: {}\n", esc, result.rtttl);
            melodies.push(result.rtttl);
        }

        println!("\n#########  ALL MELODIES #########\n");
        for melody in &melodies {
            println!("{}", melody);
        }

        match prompt(&mut input, "\nDo you want to continue? (y/n) ")? {
            Some(answer) if answer == "y" => continue,
            _ => break,
        }
    }
    Ok(())
}

/// Print a prompt and read one line; `None` means end of input.
fn prompt(input: &mut impl BufRead, question: &str) -> io::Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}
