//! Interactive command - prompt for a client's income, expenses and up to two
//! investment accounts, then loop over the investment menu until exit.

use crate::engine::error::{
    capitalize_name, check_expenses, check_investment, require_full_name, require_positive,
    require_rate, require_weeks,
};
use crate::engine::{Account, AccountSlot, Client, WeeklyView};
use crate::format::{self, Locale};
use clap::Args;
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

const ERROR_POSITIVE_AMOUNT: &str =
    "Error: The amount must be a positive number (and greater than zero).";
const ERROR_NOT_NUMERIC: &str = "Error: Must only enter a numeric value.";
const ERROR_NOT_INTEGER: &str = "Error: Must only enter a integer value.";
const ERROR_NAME: &str = "Error: Please enter your first and last name (separated by a space)";
const ERROR_YES_NO: &str = "Error: Must input either Yes or No.";
const ERROR_RATE: &str = "Error: The interest rate must be between 1 and 100.";
const ERROR_MENU_OPTION: &str =
    "Error: Please enter a number corresponding to the options shown on the menu.";
const SEPARATOR: &str = "---------------------";

#[derive(Args, Debug, Default)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub fn exec(&self, locale: Locale) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(stdin.lock(), stdout.lock(), locale).run()
    }
}

/// Whether the session keeps going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Terminate,
}

/// One interactive run. End of input ends the session like choosing exit.
pub struct Session<R, W> {
    input: R,
    output: W,
    locale: Locale,
    client: Client,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Session {
            input,
            output,
            locale,
            client: Client::default(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        if self.income_tax()? == Outcome::Terminate {
            return Ok(());
        }
        if self.budget()? == Outcome::Terminate {
            return Ok(());
        }
        self.investment_menu()
    }

    fn weekly(&self) -> WeeklyView {
        self.client.weekly_view(&self.client.evaluate())
    }

    fn income_tax(&mut self) -> anyhow::Result<Outcome> {
        let Some(name) = self.input_name()? else {
            return Ok(Outcome::Terminate);
        };
        let Some(salary) =
            self.input_decimal("Please enter your annual income: ", "annual income")?
        else {
            return Ok(Outcome::Terminate);
        };
        let Some(resident) =
            self.input_yes_no("Are you currently a resident? [Yes or No]: ")?
        else {
            return Ok(Outcome::Terminate);
        };

        self.client = Client::new(name, salary, resident);
        let result = self.client.evaluate();
        log::info!("Evaluated {}: {:?}", self.client.name, result);
        writeln!(
            self.output,
            "{}",
            format::client_summary(self.locale, &self.client, &result)
        )?;
        Ok(Outcome::Continue)
    }

    /// Collect weekly expenses and start over with no accounts.
    /// Terminates when the client declines to re-enter or spends exactly the
    /// rounded weekly net salary.
    fn budget(&mut self) -> anyhow::Result<Outcome> {
        if self.living_expenditure()? == Outcome::Terminate {
            return Ok(Outcome::Terminate);
        }
        self.client.clear_accounts();
        if self.client.weekly_expenses == self.weekly().weekly_net_salary {
            log::info!("No funds available for investment");
            writeln!(self.output, "There are no funds left over to invest.")?;
            return Ok(Outcome::Terminate);
        }
        Ok(Outcome::Continue)
    }

    fn living_expenditure(&mut self) -> anyhow::Result<Outcome> {
        loop {
            writeln!(self.output)?;
            let Some(expenses) = self.input_decimal(
                "The amount (per week) used on living expenditures: ",
                "weekly expenses",
            )?
            else {
                return Ok(Outcome::Terminate);
            };
            self.client.weekly_expenses = expenses;

            let weekly_net = self.weekly().weekly_net_salary;
            match check_expenses(expenses, weekly_net) {
                Ok(()) => return Ok(Outcome::Continue),
                Err(e) => {
                    log::info!("{e}");
                    writeln!(
                        self.output,
                        "Warning: The amount given is more than your earnings. You will need to enter \n a new amount less than {}, otherwise the program will be terminated.",
                        self.locale.money(weekly_net)
                    )?;
                    let reenter = self.input_yes_no(
                        "Would you like to enter a new living expenditure amount? [Yes or No]: ",
                    )?;
                    if reenter != Some(true) {
                        return Ok(Outcome::Terminate);
                    }
                }
            }
        }
    }

    fn investment_menu(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output)?;
            let Some(selection) = self.menu(
                "Investment Menu",
                &[
                    "1: Edit account 1",
                    "2: Edit account 2",
                    "3: Display account 1",
                    "4: Display account 2",
                    "5: Exit",
                ],
            )?
            else {
                return Ok(());
            };

            let outcome = match selection {
                1 => self.edit_account(AccountSlot::First)?,
                2 => self.edit_account(AccountSlot::Second)?,
                3 => self.display_account(AccountSlot::First)?,
                4 => self.display_account(AccountSlot::Second)?,
                _ => self.exit_menu()?,
            };
            if outcome == Outcome::Terminate {
                return Ok(());
            }
        }
    }

    fn exit_menu(&mut self) -> anyhow::Result<Outcome> {
        let Some(selection) = self.menu(
            "Exit Menu",
            &[
                "1: Start the program again",
                "2: Calculate a new investment",
                "3: Exit",
            ],
        )?
        else {
            return Ok(Outcome::Terminate);
        };

        match selection {
            1 => {
                self.client = Client::default();
                if self.income_tax()? == Outcome::Terminate {
                    return Ok(Outcome::Terminate);
                }
                self.budget()
            }
            2 => self.budget(),
            _ => Ok(Outcome::Terminate),
        }
    }

    fn edit_account(&mut self, slot: AccountSlot) -> anyhow::Result<Outcome> {
        self.title(&format!("Edit Account {}", slot.number()))?;
        self.client.set_account(slot, None);

        let Some(amount) = self.investment_amount(slot)? else {
            return Ok(Outcome::Terminate);
        };
        let Some(rate) = self.interest_rate()? else {
            return Ok(Outcome::Terminate);
        };
        let Some(weeks) = self.investment_length()? else {
            return Ok(Outcome::Terminate);
        };

        self.client.set_account(slot, Some(Account::new(rate, weeks, amount)));
        log::info!(
            "Account {} set: {} per week at {}% for {} weeks",
            slot.number(),
            amount,
            rate,
            weeks
        );
        Ok(Outcome::Continue)
    }

    fn display_account(&mut self, slot: AccountSlot) -> anyhow::Result<Outcome> {
        self.title(&format!("Display Account {}", slot.number()))?;
        writeln!(self.output)?;
        match self.client.account(slot).copied() {
            Some(account) => {
                writeln!(self.output, "{}", format::account_summary(self.locale, &account))?;
                writeln!(self.output)?;
                match account.projection().collect::<Result<Vec<_>, _>>() {
                    Ok(checkpoints) => writeln!(
                        self.output,
                        "{}",
                        format::projection_table(self.locale, &checkpoints)
                    )?,
                    Err(e) => writeln!(self.output, "Error: The {e}.")?,
                }
            }
            None => writeln!(self.output, "Account does not exist")?,
        }
        Ok(Outcome::Continue)
    }

    fn investment_amount(&mut self, slot: AccountSlot) -> anyhow::Result<Option<Decimal>> {
        loop {
            let Some(amount) = self.input_decimal(
                "Please enter the investment amount per week: ",
                "weekly investment",
            )?
            else {
                return Ok(None);
            };
            let other = self.client.other_invested(slot);
            let available = self.weekly().available_funds;
            if check_investment(amount, other, available).is_ok() {
                return Ok(Some(amount));
            }

            writeln!(
                self.output,
                "Error: Your {} investment exceeds your available funds of {}.",
                self.locale.money(amount + other),
                self.locale.money(available)
            )?;
            if other > Decimal::ZERO {
                writeln!(
                    self.output,
                    "Please note: You currently have {} invested in your other account.",
                    self.locale.money(other)
                )?;
                writeln!(
                    self.output,
                    " So therefore you cannot exceed {}.",
                    self.locale.money((available - other).abs())
                )?;
            }
        }
    }

    fn interest_rate(&mut self) -> anyhow::Result<Option<Decimal>> {
        loop {
            let Some(rate) = self.input_decimal(
                "Please enter the interest rate percentage (between 1-100): ",
                "interest rate",
            )?
            else {
                return Ok(None);
            };
            match require_rate(rate) {
                Ok(rate) => return Ok(Some(rate)),
                Err(_) => writeln!(self.output, "{ERROR_RATE}")?,
            }
        }
    }

    fn investment_length(&mut self) -> anyhow::Result<Option<u32>> {
        loop {
            let Some(weeks) =
                self.input_integer("Please enter the investment length (# of weeks): ")?
            else {
                return Ok(None);
            };
            match require_weeks(weeks) {
                Ok(weeks) => return Ok(Some(weeks)),
                Err(_) => writeln!(self.output, "{ERROR_NOT_INTEGER}")?,
            }
        }
    }

    fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{SEPARATOR}")?;
        writeln!(self.output, "{title}")?;
        writeln!(self.output, "{SEPARATOR}")
    }

    /// Show a numbered menu until a listed option is chosen
    fn menu(&mut self, title: &str, options: &[&str]) -> anyhow::Result<Option<usize>> {
        loop {
            self.title(title)?;
            for option in options {
                writeln!(self.output, "{option}")?;
            }
            let Some(selection) = self.input_integer("Option #: ")? else {
                return Ok(None);
            };
            match usize::try_from(selection) {
                Ok(selection) if selection <= options.len() => return Ok(Some(selection)),
                _ => writeln!(self.output, "{ERROR_MENU_OPTION}")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        writeln!(self.output)?;
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn input_name(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            let Some(name) = self.prompt("Please enter your full name: ")? else {
                return Ok(None);
            };
            match require_full_name(&name) {
                Ok(name) => return Ok(Some(capitalize_name(name))),
                Err(_) => writeln!(self.output, "{ERROR_NAME}")?,
            }
        }
    }

    fn input_yes_no(&mut self, message: &str) -> anyhow::Result<Option<bool>> {
        loop {
            let Some(answer) = self.prompt(message)? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("yes") {
                return Ok(Some(true));
            }
            if answer.eq_ignore_ascii_case("no") {
                return Ok(Some(false));
            }
            writeln!(self.output, "{ERROR_YES_NO}")?;
        }
    }

    /// Read a number greater than zero
    fn input_decimal(
        &mut self,
        message: &str,
        field: &'static str,
    ) -> anyhow::Result<Option<Decimal>> {
        loop {
            let Some(text) = self.prompt(message)? else {
                return Ok(None);
            };
            match text.parse::<Decimal>() {
                Ok(value) => match require_positive(field, value) {
                    Ok(value) => return Ok(Some(value)),
                    Err(_) => writeln!(self.output, "{ERROR_POSITIVE_AMOUNT}")?,
                },
                Err(_) => writeln!(self.output, "{ERROR_NOT_NUMERIC}")?,
            }
        }
    }

    /// Read a whole number greater than zero
    fn input_integer(&mut self, message: &str) -> anyhow::Result<Option<i64>> {
        loop {
            let Some(text) = self.prompt(message)? else {
                return Ok(None);
            };
            match text.parse::<i64>() {
                Ok(value) if value > 0 => return Ok(Some(value)),
                Ok(_) => writeln!(self.output, "{ERROR_POSITIVE_AMOUNT}")?,
                Err(_) => writeln!(self.output, "{ERROR_NOT_INTEGER}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn run(script: &str) -> (String, Client) {
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), Locale::EnAu);
        session.run().unwrap();
        let client = session.client().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, client)
    }

    const CLIENT: &str = "jane citizen\n50000\nyes\n";

    #[test]
    fn projects_an_account_and_exits() {
        let (output, client) = run(&format!("{CLIENT}300\n1\n100\n12\n10\n3\n5\n3\n"));

        assert!(output.contains("Name: Jane Citizen"));
        assert!(output.contains("Per Week: $782.69"));
        assert!(output.contains("Medicare Levy Per Year: $750.00"));
        assert!(output.contains("Investment Menu"));
        assert!(output.contains("Invested per week: $100.00"));
        assert!(output.contains("Interest rate: 12%"));
        assert!(output.contains("$403.69"));
        assert!(output.contains("$1,011.11"));
        assert!(output.contains("Exit Menu"));

        assert_eq!(client.weekly_expenses, dec!(300));
        assert_eq!(client.account1, Some(Account::new(dec!(12), 10, dec!(100))));
        assert_eq!(client.account2, None);
    }

    #[test]
    fn invalid_entries_are_reprompted() {
        let (output, client) = run("Jane\njane citizen\nabc\n-5\n50000\nmaybe\nNO\n");

        assert!(output.contains(ERROR_NAME));
        assert!(output.contains(ERROR_NOT_NUMERIC));
        assert!(output.contains(ERROR_POSITIVE_AMOUNT));
        assert!(output.contains(ERROR_YES_NO));
        assert!(!client.resident);
        assert!(output.contains("Medicare Levy Per Year: $0.00"));
    }

    #[test]
    fn declining_to_reenter_expenses_terminates() {
        let (output, _) = run(&format!("{CLIENT}900\nno\n1\n"));

        assert!(output.contains("Warning: The amount given is more than your earnings"));
        assert!(output.contains("$782.69"));
        assert!(!output.contains("Investment Menu"));
    }

    #[test]
    fn reentered_expenses_continue() {
        let (output, client) = run(&format!("{CLIENT}900\nyes\n200\n5\n3\n"));

        assert!(output.contains("Investment Menu"));
        assert_eq!(client.weekly_expenses, dec!(200));
    }

    #[test]
    fn expenses_equal_to_net_salary_end_session() {
        let (output, _) = run(&format!("{CLIENT}782.69\n"));

        assert!(!output.contains("Warning"));
        assert!(output.contains("There are no funds left over to invest."));
        assert!(!output.contains("Investment Menu"));
    }

    #[test]
    fn expenses_below_net_salary_by_a_fraction_continue() {
        let (output, client) = run(&format!("{CLIENT}782.686\n5\n3\n"));

        assert_eq!(client.weekly_expenses, dec!(782.686));
        assert!(!output.contains("There are no funds left over to invest."));
        assert!(output.contains("Investment Menu"));
        assert!(output.contains("Exit Menu"));
    }

    #[test]
    fn missing_account_is_reported() {
        let (output, _) = run(&format!("{CLIENT}300\n4\n5\n3\n"));
        assert!(output.contains("Display Account 2"));
        assert!(output.contains("Account does not exist"));
    }

    #[test]
    fn second_account_limited_by_first() {
        // 482.69 available, 400 already in account 1
        let (output, client) = run(&format!("{CLIENT}300\n1\n400\n5\n8\n2\n100\n80\n5\n8\n5\n3\n"));

        assert!(output
            .contains("Error: Your $500.00 investment exceeds your available funds of $482.69."));
        assert!(output.contains("You currently have $400.00 invested in your other account."));
        assert!(output.contains("you cannot exceed $82.69."));
        assert_eq!(client.account2.map(|a| a.amount()), Some(dec!(80)));
    }

    #[test]
    fn editing_an_account_replaces_it() {
        let (_, client) = run(&format!("{CLIENT}300\n1\n400\n5\n8\n1\n450\n6\n12\n5\n3\n"));
        assert_eq!(client.account1, Some(Account::new(dec!(6), 12, dec!(450))));
    }

    #[test]
    fn rate_and_length_are_validated() {
        let (output, client) = run(&format!("{CLIENT}300\n1\n100\n0.5\n150\n7.5\n2.5\n13\n5\n3\n"));

        assert_eq!(output.matches(ERROR_RATE).count(), 2);
        assert!(output.contains(ERROR_NOT_INTEGER));
        assert_eq!(client.account1, Some(Account::new(dec!(7.5), 13, dec!(100))));
    }

    #[test]
    fn menu_option_out_of_range() {
        let (output, _) = run(&format!("{CLIENT}300\n9\n5\n3\n"));
        assert!(output.contains(ERROR_MENU_OPTION));
    }

    #[test]
    fn new_investment_clears_accounts() {
        let (output, client) = run(&format!("{CLIENT}300\n1\n100\n5\n8\n5\n2\n250\n3\n5\n3\n"));

        assert_eq!(client.weekly_expenses, dec!(250));
        assert_eq!(client.account1, None);
        assert!(output.contains("Account does not exist"));
    }

    #[test]
    fn start_again_replaces_client() {
        let (output, client) =
            run(&format!("{CLIENT}300\n5\n1\nbob smith\n90000\nno\n500\n5\n3\n"));

        assert!(output.contains("Name: Bob Smith"));
        assert_eq!(client.name, "Bob Smith");
        assert_eq!(client.evaluate().net_salary, dec!(62670));
        assert_eq!(client.weekly_expenses, dec!(500));
    }

    #[test]
    fn end_of_input_ends_cleanly() {
        let (output, _) = run(&format!("{CLIENT}300\n1\n100\n"));
        assert!(output.contains("Please enter the interest rate percentage"));
    }

    #[test]
    fn oversized_projection_is_reported_and_menu_continues() {
        let (output, client) = run(&format!("{CLIENT}300\n1\n100\n100\n5000\n3\n5\n3\n"));

        assert_eq!(client.account1, Some(Account::new(dec!(100), 5000, dec!(100))));
        assert!(output.contains("Number of weeks: 5000"));
        assert!(output.contains("Error: The projected balance is too large to represent"));
        assert!(output.contains("Exit Menu"));
    }
}
