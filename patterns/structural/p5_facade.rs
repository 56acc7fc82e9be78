//! Structural Pattern 5: Facade
//! Example: one bank-account API in front of three checking subsystems
//!
//! Run with: cargo run --bin p5_facade

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
enum TransactionError {
    #[error("account {0} is not active")]
    InactiveAccount(u32),
    #[error("security code rejected")]
    BadSecurityCode,
    #[error("not enough money: balance is {balance:.2}")]
    InsufficientFunds { balance: f64 },
}

struct AccountNumberCheck {
    account_number: u32,
}

impl AccountNumberCheck {
    fn is_active(&self, account_number: u32) -> bool {
        account_number == self.account_number
    }
}

struct SecurityCodeCheck {
    security_code: u32,
}

impl SecurityCodeCheck {
    fn is_correct(&self, code: u32) -> bool {
        code == self.security_code
    }
}

struct FundsCheck {
    cash: f64,
}

impl FundsCheck {
    fn withdraw(&mut self, amount: f64) -> Result<f64, TransactionError> {
        if amount > self.cash {
            return Err(TransactionError::InsufficientFunds { balance: self.cash });
        }
        self.cash -= amount;
        Ok(self.cash)
    }

    fn deposit(&mut self, amount: f64) -> f64 {
        self.cash += amount;
        self.cash
    }
}

/// The facade. Callers never touch the checks directly.
struct BankAccount {
    account_number: u32,
    security_code: u32,
    accounts: AccountNumberCheck,
    codes: SecurityCodeCheck,
    funds: FundsCheck,
}

impl BankAccount {
    fn open(account_number: u32, security_code: u32) -> Self {
        println!("Welcome to ABC Bank");
        BankAccount {
            account_number,
            security_code,
            accounts: AccountNumberCheck {
                account_number: 12345678,
            },
            codes: SecurityCodeCheck {
                security_code: 1234,
            },
            funds: FundsCheck { cash: 1000.0 },
        }
    }

    fn authorise(&self) -> Result<(), TransactionError> {
        if !self.accounts.is_active(self.account_number) {
            return Err(TransactionError::InactiveAccount(self.account_number));
        }
        if !self.codes.is_correct(self.security_code) {
            return Err(TransactionError::BadSecurityCode);
        }
        Ok(())
    }

    fn withdraw_cash(&mut self, amount: f64) -> Result<f64, TransactionError> {
        self.authorise()?;
        self.funds.withdraw(amount)
    }

    fn deposit_cash(&mut self, amount: f64) -> Result<f64, TransactionError> {
        self.authorise()?;
        Ok(self.funds.deposit(amount))
    }
}

fn report(label: &str, result: Result<f64, TransactionError>) {
    match result {
        Ok(balance) => println!("{} complete: current balance is {:.2}", label, balance),
        Err(e) => println!("{} failed: {}", label, e),
    }
}

fn main() {
    let mut account = BankAccount::open(12345678, 1234);
    report("Withdrawal", account.withdraw_cash(60.0));
    report("Deposit", account.deposit_cash(990.0));
    report("Withdrawal", account.withdraw_cash(5000.0));

    let mut stranger = BankAccount::open(87654321, 1234);
    report("Withdrawal", stranger.withdraw_cash(1.0));
}
