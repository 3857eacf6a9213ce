use crate::app::questions::catalog;
use crate::core::command::{ItemChoice, MenuChoice, QuestionId};
use crate::core::prompt::{ask, warn};
use crate::domain::ports::{Console, Question};
use crate::utils::error::Result;

pub const RULE_WIDTH: usize = 50;
const SUBMENU_RULE_WIDTH: usize = 36;
pub const EXIT_MESSAGE: &str = "Closing the program";

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSettings {
    pub title: String,
    pub clear_screen: bool,
    pub pause_after_item: bool,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            title: "PP Questions".to_string(),
            clear_screen: true,
            pause_after_item: true,
        }
    }
}

/// Main-menu dispatcher. Single-threaded: every item runs to completion
/// before the next prompt.
pub struct MenuEngine<C: Console> {
    console: C,
    questions: [Box<dyn Question>; 5],
    settings: MenuSettings,
    running: bool,
}

impl<C: Console> MenuEngine<C> {
    pub fn new(console: C, settings: MenuSettings) -> Self {
        Self {
            console,
            questions: catalog(),
            settings,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting menu session");
        self.console.writeln(&self.settings.title)?;
        self.console.writeln(&"=".repeat(RULE_WIDTH))?;

        while self.running {
            self.step()?;
        }

        tracing::info!("Menu session finished");
        Ok(())
    }

    /// One pass of the loop: show the menu, read a choice, dispatch it.
    pub fn step(&mut self) -> Result<()> {
        self.show_menu()?;

        let choice = match self.console.read_line()? {
            Some(line) => MenuChoice::parse(&line),
            None => {
                tracing::debug!("End of input on the main menu");
                MenuChoice::Exit
            }
        };
        tracing::debug!("Main menu choice: {:?}", choice);

        match choice {
            MenuChoice::Question(id) => self.run_question(id)?,
            MenuChoice::Exit => {
                self.running = false;
                self.console.writeln(EXIT_MESSAGE)?;
            }
            MenuChoice::Unrecognized(_) => {
                warn(&mut self.console, "Invalid option! Try again.")?;
            }
        }

        if self.running {
            if self.settings.pause_after_item {
                self.console.writeln("\nPress Enter to continue...")?;
                self.console.read_line()?;
            }
            if self.settings.clear_screen {
                self.console.clear()?;
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.writeln("\n📋 MAIN MENU")?;
        self.console.writeln("================")?;
        for id in QuestionId::ALL {
            self.console.writeln(&format!("{} - {}", id.number(), id))?;
        }
        self.console.writeln("0 - Exit")?;
        self.console.writeln("================")?;
        self.console.write("Choose an option: ")
    }

    fn run_question(&mut self, id: QuestionId) -> Result<()> {
        let question = &self.questions[id.index()];
        let console: &mut dyn Console = &mut self.console;

        if self.settings.clear_screen {
            console.clear()?;
        }
        console.writeln(question.header())?;
        console.writeln(&"=".repeat(SUBMENU_RULE_WIDTH))?;
        for (number, label) in (1..).zip(question.items()) {
            console.writeln(&format!("{}. {}", number, label))?;
        }
        console.writeln(&"=".repeat(SUBMENU_RULE_WIDTH))?;

        let item = match ask(console, "Choose an item (1-3): ")? {
            Some(line) => ItemChoice::parse(&line),
            None => return Ok(()),
        };
        tracing::debug!("{} item choice: {:?}", id, item);

        question.run_item(item, console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferedConsole;

    fn quiet_settings() -> MenuSettings {
        MenuSettings {
            clear_screen: false,
            pause_after_item: false,
            ..MenuSettings::default()
        }
    }

    #[test]
    fn test_exit_stops_the_session() {
        let console = BufferedConsole::scripted(&["0"]);
        let mut engine = MenuEngine::new(console, quiet_settings());
        engine.step().unwrap();
        assert!(!engine.is_running());
        assert!(engine.into_console().output().ends_with("Closing the program\n"));
    }

    #[test]
    fn test_unrecognized_choice_keeps_running() {
        for raw in ["6", "", "abc", " 0"] {
            let console = BufferedConsole::scripted(&[raw]);
            let mut engine = MenuEngine::new(console, quiet_settings());
            engine.step().unwrap();
            assert!(engine.is_running(), "{:?} should not end the session", raw);
            assert!(engine
                .into_console()
                .output()
                .contains("❌ Invalid option! Try again."));
        }
    }

    #[test]
    fn test_end_of_input_exits() {
        let console = BufferedConsole::scripted(&[]);
        let mut engine = MenuEngine::new(console, quiet_settings());
        engine.run().unwrap();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_invalid_item_warns() {
        let console = BufferedConsole::scripted(&["2", "9", "0"]);
        let mut engine = MenuEngine::new(console, quiet_settings());
        engine.run().unwrap();
        let output = engine.into_console().output();
        assert!(output.contains("🔄 QUESTION 2 - CONTROL STRUCTURES"));
        assert!(output.contains("❌ Invalid item!"));
    }

    #[test]
    fn test_pause_reads_an_acknowledgement() {
        let settings = MenuSettings {
            clear_screen: false,
            ..MenuSettings::default()
        };
        // "x" is consumed by the pause, not parsed as a menu choice
        let console = BufferedConsole::scripted(&["7", "x", "0"]);
        let mut engine = MenuEngine::new(console, settings);
        engine.run().unwrap();
        let output = engine.into_console().output();
        assert_eq!(output.matches("Invalid option!").count(), 1);
        assert!(output.contains("Press Enter to continue..."));
    }
}
