//! Line-based front end for the transfer flow.

use crate::view::{print_draft, print_journey_step, print_ledger, print_receipt, print_wallet};
use anyhow::Result;
use bonsai_chain::{FlowController, Screen};
use bonsai_core::GasTier;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Create(String),
    Send,
    Tier(GasTier),
    Review { to: String, amount: String },
    Execute,
    Cancel,
    Ledger,
    Back,
    Status,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> std::result::Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "create" => Ok(ReplCommand::Create(rest.to_string())),
        "send" => Ok(ReplCommand::Send),
        "tier" => rest
            .parse()
            .map(ReplCommand::Tier)
            .map_err(|e| format!("{}", e)),
        "review" => {
            let mut parts = rest.split_whitespace();
            let to = parts.next().unwrap_or_default().to_string();
            let amount = parts.next().unwrap_or_default().to_string();
            Ok(ReplCommand::Review { to, amount })
        }
        "execute" | "confirm" => Ok(ReplCommand::Execute),
        "cancel" => Ok(ReplCommand::Cancel),
        "ledger" => Ok(ReplCommand::Ledger),
        "back" => Ok(ReplCommand::Back),
        "status" | "" => Ok(ReplCommand::Status),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command '{}'; type 'help'", other)),
    }
}

/// Commands that make sense on each screen.
fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::WalletSetup => "create <name>",
        Screen::Dashboard => "send | ledger | status",
        Screen::Compose => "tier <slow|medium|fast> | review <to> <amount> | cancel",
        Screen::Confirm => "execute | cancel",
        Screen::Animating => "",
        Screen::Receipt => "back | ledger",
        Screen::LedgerView => "back | ledger",
    }
}

pub struct Repl<'a> {
    flow: FlowController<'a>,
}

impl<'a> Repl<'a> {
    pub fn new(flow: FlowController<'a>) -> Self {
        Self { flow }
    }

    pub fn run<R: BufRead>(mut self, input: R) -> Result<()> {
        println!("{}", "Welcome to the bonsai ledger playground.".bold().cyan());
        self.render();

        let mut lines = input.lines();
        loop {
            print!("{} ", format!("{}>", self.flow.screen()).bright_black());
            io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };

            match parse_command(&line) {
                Ok(ReplCommand::Quit) => break,
                Ok(cmd) => {
                    if let Err(e) = self.apply(cmd) {
                        // Every failure keeps the current screen
                        println!("{} {}", "!".red().bold(), e.to_string().red());
                    }
                }
                Err(msg) => println!("{} {}", "?".yellow().bold(), msg),
            }
        }

        println!("Bye.");
        Ok(())
    }

    fn apply(&mut self, cmd: ReplCommand) -> Result<()> {
        match cmd {
            ReplCommand::Create(name) => {
                self.flow.create_wallet(&name)?;
                self.render();
            }
            ReplCommand::Send => {
                self.flow.start_transfer()?;
                self.render();
            }
            ReplCommand::Tier(tier) => {
                let fee = self.flow.set_tier(tier)?;
                println!("  Gas fee: {} BON", fee.fixed(6).bright_cyan());
            }
            ReplCommand::Review { to, amount } => {
                self.flow.review(&to, &amount)?;
                self.render();
            }
            ReplCommand::Execute => {
                self.flow.execute(print_journey_step)?;
                self.render();
            }
            ReplCommand::Cancel => {
                self.flow.cancel()?;
                self.render();
            }
            ReplCommand::Ledger => {
                self.flow.toggle_ledger()?;
                self.render();
            }
            ReplCommand::Back => {
                match self.flow.screen() {
                    Screen::Receipt => self.flow.dismiss_receipt()?,
                    Screen::LedgerView => self.flow.toggle_ledger()?,
                    Screen::Compose | Screen::Confirm => self.flow.cancel()?,
                    _ => {}
                }
                self.render();
            }
            ReplCommand::Status => self.render(),
            ReplCommand::Help => print_help(),
            ReplCommand::Quit => {}
        }
        Ok(())
    }

    fn render(&self) {
        match self.flow.screen() {
            Screen::WalletSetup => {
                println!();
                println!("{}", "No wallet yet.".yellow());
            }
            Screen::Dashboard => {
                if let Some(wallet) = self.flow.wallet() {
                    print_wallet(wallet);
                }
            }
            Screen::Compose => {
                println!();
                println!(
                    "  Gas tier: {} ({} BON)",
                    self.flow.tier(),
                    self.flow.fee().fixed(6).bright_cyan()
                );
            }
            Screen::Confirm => {
                if let Some(draft) = self.flow.draft() {
                    print_draft(draft);
                }
            }
            Screen::Animating => {}
            Screen::Receipt => {
                if let Some(receipt) = self.flow.last_receipt() {
                    print_receipt(receipt);
                }
            }
            Screen::LedgerView => print_ledger(self.flow.ledger()),
        }
        let hint = hint(self.flow.screen());
        if !hint.is_empty() {
            println!("  {}", hint.bright_black());
        }
    }
}

fn print_help() {
    println!();
    println!("{}", "Commands:".bold().cyan());
    println!("  create <name>             create your wallet");
    println!("  send                      start a transfer");
    println!("  tier <slow|medium|fast>   pick the gas tier");
    println!("  review <to> <amount>      check the transfer");
    println!("  execute                   send it");
    println!("  cancel                    drop the transfer");
    println!("  ledger                    toggle the ledger view");
    println!("  back                      return to the dashboard");
    println!("  status                    redraw the screen");
    println!("  quit                      leave");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bonsai_chain::{Journey, Session, SessionConfig};
    use bonsai_storage::{Storage, WalletStore};

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("create Ada Lovelace"), Ok(ReplCommand::Create("Ada Lovelace".into())));
        assert_eq!(parse_command("  SEND "), Ok(ReplCommand::Send));
        assert_eq!(parse_command("tier fast"), Ok(ReplCommand::Tier(GasTier::Fast)));
        assert_eq!(
            parse_command("review 0xabc 12.5"),
            Ok(ReplCommand::Review { to: "0xabc".into(), amount: "12.5".into() })
        );
        assert_eq!(parse_command("confirm"), Ok(ReplCommand::Execute));
        assert_eq!(parse_command(""), Ok(ReplCommand::Status));
        assert_eq!(parse_command("exit"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("tier warp").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn test_review_with_missing_parts() {
        assert_eq!(
            parse_command("review"),
            Ok(ReplCommand::Review { to: String::new(), amount: String::new() })
        );
    }

    #[test]
    fn test_execute_off_confirm_is_rejected() {
        let storage = Storage::open_temporary().unwrap();
        let session = Session::open(WalletStore::new(&storage), SessionConfig::default()).unwrap();
        let mut repl = Repl::new(FlowController::new(session).with_journey(Journey::instant()));

        repl.apply(ReplCommand::Create("Ada".into())).unwrap();
        assert!(repl.apply(ReplCommand::Execute).is_err());
        assert_eq!(repl.flow.screen(), Screen::Dashboard);
        assert!(repl.flow.ledger_rows().is_empty());
    }

    #[test]
    fn test_scripted_session() {
        let storage = Storage::open_temporary().unwrap();
        let session = Session::open(WalletStore::new(&storage), SessionConfig::default()).unwrap();
        let flow = FlowController::new(session).with_journey(Journey::instant());

        let script = "create Ada\nsend\nreview bob 5000\nreview bob 100\nexecute\nback\nquit\n";
        Repl::new(flow).run(script.as_bytes()).unwrap();

        let wallet = WalletStore::new(&storage).load().unwrap().unwrap();
        assert_eq!(wallet.display_name, "Ada");
        assert_eq!(wallet.balance.to_string(), "899.99895");
    }
}
