//! A login form with two validated fields and a gated submit action.
//!
//! Logs every revalidation at TRACE level.

use validated::form::{all_valid, collect_messages};
use validated::prelude::*;

struct LoginForm {
    mail: Validated<String>,
    password: Validated<String>,
}

impl LoginForm {
    fn new() -> Self {
        let mut mail = Validated::new(
            String::new(),
            [
                not_empty().with_message("mail.required"),
                is_email().with_message("mail.invalid"),
            ],
        );
        mail.subscribe(|snapshot| {
            println!("  mail {:?} -> valid: {}", snapshot.value, snapshot.is_valid);
        });

        let password = Validated::with_rule(
            String::new(),
            length(8..).with_message("password.too_short"),
        );

        Self { mail, password }
    }

    fn can_submit(&self) -> bool {
        all_valid(&[&self.mail, &self.password])
    }

    fn submit(&self) {
        if self.can_submit() {
            println!("✓ logging in as {}", self.mail.value());
        } else {
            let messages: Vec<_> = collect_messages(&[&self.mail, &self.password])
                .iter()
                .map(Message::to_string)
                .collect();
            println!("✗ cannot submit: {}", messages.join(", "));
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut form = LoginForm::new();
    form.submit();

    form.mail.binding().set("mustermann".to_string());
    form.password.binding().set("hunter2".to_string());
    form.submit();

    form.mail.binding().set("max@mustermann.com".to_string());
    form.password.binding().set("correct horse".to_string());
    form.submit();
}
