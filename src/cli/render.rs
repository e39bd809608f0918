//! Text screens for each game state.

use core::fmt::Write;

use zombie_dice::{Die, DieType, Face, GameState, Player, Snapshot};

const BOX_WIDTH: usize = 40;

const WELCOME: &str = r"
           ---> Welcome to the Zombie Dice game <---

    The object of the jeopardy dice game Zombie Dice is to be the
    first to eat enough human brains in a turn.
    Each player's turn consists of repeatedly rolling 3 dice.
    A die may produce 3 outcomes: you ate a brain, the human escaped,
    or you were shot!
    If you get shot 3 or more times you die and lose all brains you
    ate in that turn; then the turn goes to the next player.
    However, if you decide to stop before getting shot 3 times, you
    keep the brains you ate.

";

/// Renders the screen shown after entering `snapshot.state`.
pub(super) fn screen(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    match snapshot.state {
        GameState::Welcome => out.push_str(WELCOME),
        GameState::ReadingSize => out.push_str(">>> How many players (min 2)?\n"),
        GameState::InvalidSize => out.push_str(">>> Invalid size! Try again:\n"),
        GameState::LessThanTwo => out.push_str(">>> At least two players! Try again:\n"),
        GameState::ReadingPlayers => names_prompt(&mut out, snapshot.expected_players),
        GameState::InvalidNames(err) => {
            let _ = writeln!(out, ">>> {err}! Try again:");
            names_prompt(&mut out, snapshot.expected_players);
        }
        GameState::Init => {
            global_score(&mut out, snapshot);
            if let Some(player) = snapshot.active_player() {
                let _ = write!(
                    out,
                    "\n>>> Next up: \"{}\"\nPress <Enter> to start the turn.",
                    player.name()
                );
            }
        }
        GameState::Start | GameState::InitTie | GameState::End | GameState::Quit => {
            global_score(&mut out, snapshot);
            scoreboard(&mut out, snapshot);
            message_area(&mut out, snapshot);
        }
        GameState::ShowDice
        | GameState::ForceQuit
        | GameState::ShowScoreboard
        | GameState::InvalidOption => {
            scoreboard(&mut out, snapshot);
            message_area(&mut out, snapshot);
        }
        _ => {}
    }

    out
}

fn names_prompt(out: &mut String, count: usize) {
    let _ = writeln!(
        out,
        ">>> Enter the name of the {count} players, separated by comma \
         (ex.: \"player #1, player #2\" etc.):"
    );
}

const fn face_icon(face: Face) -> &'static str {
    match face {
        Face::Brain => "🧠",
        Face::Shot => "💥",
        Face::Run => "👣",
    }
}

const fn color_icon(kind: DieType) -> &'static str {
    match kind {
        DieType::Weak => "🟩",
        DieType::Tough => "🟨",
        DieType::Strong => "🟥",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn global_score(out: &mut String, snapshot: &Snapshot) {
    out.push_str(
        "\n      ->💥[🧟] Zombie Dice Deluxe [🧟]💥<-\n\n\
         ┌────────────────────────┐\n\
         │      Global Score      │\n\
         └────────────────────────┘\n",
    );

    let width = snapshot
        .players
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0);
    let leader = snapshot.leader_brains();
    let bar = if leader >= snapshot.brains_to_win {
        leader + 5
    } else {
        snapshot.brains_to_win
    };
    let ended = snapshot.state == GameState::End;

    for (index, player) in snapshot.players.iter().enumerate() {
        let marker = if ended || index == snapshot.active {
            colorize(">", "32")
        } else {
            " ".to_string()
        };
        let _ = writeln!(
            out,
            "{marker}{:>width$}: {}{}│ ({}), # turns played: {}",
            player.name(),
            "🧠".repeat(player.brains()),
            "🔸".repeat(bar.saturating_sub(player.brains())),
            player.brains(),
            player.turns(),
        );
    }
}

fn die_cell(die: &Die) -> String {
    die.face().map_or_else(
        || format!("   {}   ", color_icon(die.kind())),
        |face| format!(" {}({}) ", face_icon(face), color_icon(die.kind())),
    )
}

fn store_line(out: &mut String, icon: &str, dice: &[Die]) {
    let _ = write!(out, "{icon}: ");
    for die in dice {
        let _ = write!(out, "{} ", color_icon(die.kind()));
    }
    let _ = writeln!(out, "({})", dice.len());
}

fn scoreboard(out: &mut String, snapshot: &Snapshot) {
    match (snapshot.state, snapshot.active_player()) {
        (GameState::End, _) => {
            let names: Vec<&str> = snapshot.players.iter().map(Player::name).collect();
            let _ = writeln!(out, "\nPlayer: \"{}\" 🎲.", names.join("\", \""));
        }
        (_, Some(player)) => {
            let _ = writeln!(
                out,
                "\nPlayer: \"{}\" │ Turn #: {} │ Bag has: {} 🎲.",
                player.name(),
                player.turns() + 1,
                snapshot.bag
            );
        }
        (_, None) => {}
    }

    out.push_str(
        "\n┌──────────────────────────┐\n\
         │      Rolling Table       │\n\
         ├────────┬────────┬────────┤\n",
    );
    if snapshot.state == GameState::ShowDice && !snapshot.rolled.is_empty() {
        out.push('│');
        for die in &snapshot.rolled {
            let _ = write!(out, "{}│", die_cell(die));
        }
    } else {
        out.push_str("│        │        │        │");
    }
    out.push_str("\n└────────┴────────┴────────┘\n");

    store_line(out, "🧠", &snapshot.brains);
    store_line(out, "💥", &snapshot.shots);
    out.push('\n');
}

fn boxed(out: &mut String, text: &str) {
    let pad = BOX_WIDTH.saturating_sub(text.chars().count());
    let _ = writeln!(out, "│{text}{}│", " ".repeat(pad));
}

fn ready_prompt(out: &mut String, snapshot: &Snapshot) {
    boxed(out, " Ready to play?");
    if !snapshot.brains.is_empty() {
        boxed(out, &format!("   brains this turn: {}", snapshot.brains.len()));
    }
    boxed(out, "   <enter> - roll dice");
    boxed(out, "   H + <enter> - hold turn");
    boxed(out, "   Q + <enter> - quit game");
}

fn message_area(out: &mut String, snapshot: &Snapshot) {
    out.push_str("┌─[Message area]─────────────────────────┐\n");

    match snapshot.state {
        GameState::Start | GameState::ShowScoreboard => ready_prompt(out, snapshot),
        GameState::InvalidOption => {
            boxed(out, " Invalid option! Try again:");
            ready_prompt(out, snapshot);
        }
        GameState::ShowDice => {
            let count = |face: Face| {
                snapshot
                    .rolled
                    .iter()
                    .filter(|d| d.face() == Some(face))
                    .count()
            };
            boxed(out, " Rolling outcome:");
            boxed(out, &format!("   # brains you ate: {}", count(Face::Brain)));
            boxed(out, &format!("   # shots that hit you: {}", count(Face::Shot)));
            boxed(out, " Press <enter> to continue");
        }
        GameState::ForceQuit => {
            boxed(out, " You lost!");
            boxed(out, &format!("   You got {} shots!", snapshot.shots.len()));
            if let Some(next) = snapshot.next_player() {
                boxed(out, &format!("   Next player: {}", next.name()));
            }
            boxed(out, " Press <enter> to continue");
        }
        GameState::InitTie => {
            boxed(out, " Tie break!");
            boxed(out, "  Tie break players:");
            for player in &snapshot.players {
                boxed(out, &format!("  {}", player.name()));
            }
            boxed(out, "  Removed players:");
            for player in &snapshot.eliminated {
                boxed(out, &format!("  {}", player.name()));
            }
            boxed(out, " Let's play the tie break!");
            boxed(out, " Press <enter> to continue");
        }
        GameState::End => {
            boxed(out, " Game Over!");
            match snapshot.players.as_slice() {
                [winner] => boxed(out, &format!(" Winner: {}", winner.name())),
                winners => {
                    boxed(out, " Winners (unbreakable tie):");
                    for winner in winners {
                        boxed(out, &format!("   {}", winner.name()));
                    }
                }
            }
            boxed(out, &format!("   Rounds played: {}", snapshot.rounds_played()));
            boxed(out, "   Thanks for playing!");
        }
        GameState::Quit => {
            boxed(out, " Game Over!");
            boxed(out, "   The game has no winners!");
            boxed(out, &format!("   Rounds played: {}", snapshot.rounds_played()));
            boxed(out, "   Thanks for playing!");
        }
        _ => {}
    }

    out.push_str("└────────────────────────────────────────┘\n🧟> ");
}
