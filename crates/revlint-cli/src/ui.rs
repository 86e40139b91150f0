use std::collections::BTreeMap;
use std::fmt::Display;

use colored::Colorize;
use revlint_lint::Matching;

const INDENT: &str = "           ";

pub fn failure(err: &dyn Display) {
    eprintln!("{}", err.to_string().red());
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn render_matchings(matchings: &[Matching]) {
    for matching in matchings {
        println!("{}", "----".white());
        println!();

        if let Some(id) = &matching.id {
            println!("{}{}", "Id       : ".yellow(), id.to_string().white());
        }

        println!("{}", "Message  : ".yellow());
        for line in matching.message.split('\n') {
            println!("{}{}", INDENT.yellow(), line.white());
        }
        println!();

        for (i, error) in matching.errors().enumerate() {
            if i == 0 {
                println!("{}- {}", "Error(s) : ".yellow(), error.to_string().red());
            } else {
                println!("{}- {}", INDENT, error.to_string().red());
            }
        }
        println!();
    }
}

pub fn render_examples(examples: &BTreeMap<String, String>) {
    println!("{}", "=======".white());
    println!();
    println!(
        "{}",
        "Your message must match one of those following patterns :".white()
    );
    println!();

    for (key, example) in examples {
        println!("{}", "----".white());
        println!();
        println!("{}", format!("{} : ", example_title(key)).yellow());
        println!();
        println!("{}", example.cyan());
    }
}

/// `a_simple_commit` -> `A simple commit`.
fn example_title(key: &str) -> String {
    let mut chars = key.chars();
    let title: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    title.replace('_', " ")
}
