//! Console rock-paper-scissors demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use parlor::rps::{self, Move, Outcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let player = loop {
        let input = prompt_line("Enter a choice (rock, paper, scissors): ");
        match Move::parse(&input) {
            Some(choice) => break choice,
            None => println!("Invalid input! Please choose rock, paper, or scissors."),
        }
    };

    let computer = Move::random(&mut rng);
    println!("You chose {player}, computer chose {computer}");

    match rps::duel(player, computer) {
        Outcome::Tie => println!("It's a tie!"),
        Outcome::Win => println!("{} You win!", blurb(player)),
        Outcome::Lose => println!("{} You lose.", blurb(computer)),
    }
}

/// How the winning move wins.
fn blurb(winner: Move) -> &'static str {
    match winner {
        Move::Rock => "Rock smashes scissors!",
        Move::Paper => "Paper covers rock!",
        Move::Scissors => "Scissors cut paper!",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
