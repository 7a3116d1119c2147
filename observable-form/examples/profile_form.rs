//! Profile Form Example
//!
//! Builds a two-field form, subscribes to it, and walks the email field
//! through a few values while printing the derived state.
//!
//! Debug logging goes to `profile_form.log`.

use std::fs::File;

use log::LevelFilter;
use observable_form::prelude::*;
use simplelog::{Config, WriteLogger};

struct ProfileForm {
    name: Field<String>,
    email: Field<String>,
    form: Form,
}

impl ProfileForm {
    fn new() -> Result<Self, ConfigError> {
        let name = Field::builder(String::new())
            .name("name")
            .validator(Validator::required())
            .validator(Validator::max_length(64))
            .build();
        let email = Field::with_config(
            String::new(),
            [Validator::required(), Validator::email()],
            FieldConfig::new("email"),
        )?;
        let form = Form::builder()
            .name("profile")
            .field("name", &name)
            .field("email", &email)
            .build()?;
        Ok(Self { name, email, form })
    }
}

fn print_email(field: &Field<String>) {
    let (value, errors) = field.snapshot();
    println!(
        "email = {:?}: valid={} required={} email={}",
        value,
        errors.is_valid(),
        errors[&ValidatorKind::REQUIRED],
        errors[&ValidatorKind::EMAIL],
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("profile_form.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let profile = ProfileForm::new()?;

    let reader = profile.form.clone();
    profile.form.subscribe(move |event| {
        println!(
            "  form changed via '{}': valid={} invalid={:?}",
            event.member,
            event.is_valid,
            reader.invalid_fields().collect::<Vec<_>>()
        );
    });

    print_email(&profile.email);
    for value in ["test", "test@gmail.com"] {
        profile.email.set(value.to_string());
        print_email(&profile.email);
    }

    profile.name.set("Ada".to_string());

    match profile.form.validate() {
        ValidationResult::Valid => println!("profile is valid"),
        ValidationResult::Invalid(errors) => {
            for error in errors {
                println!("{} fails {:?}", error.field_name, error.failing);
            }
        }
    }

    Ok(())
}
