//! Payment form walkthrough.
//!
//! Run with: `cargo run --example payment_form`

use cardform::clock::FixedClock;
use cardform::form::{PaymentForm, SubmitOutcome};
use cardform::{Field, ValidatorOptions};

fn show(form: &PaymentForm<FixedClock>, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Accepted => println!("  -> Payment Successful"),
        SubmitOutcome::Rejected(_) => {
            for field in Field::ALL {
                if let Some(message) = form.field_error(field) {
                    println!("  -> {:<10} {}", field.label(), message);
                }
            }
        }
    }
    println!();
}

fn main() {
    println!("=== Payment Form Validation ===\n");

    let clock = FixedClock::ymd(2025, 6, 1).expect("valid date");
    let mut form = PaymentForm::with_clock(clock);

    // -------------------------------------------------------------------------
    // A complete, valid Visa submission
    // -------------------------------------------------------------------------
    println!("Valid Visa card:");
    form.set_field(Field::CardNumber, "4111111145551142");
    form.set_field(Field::ExpDate, "08/25");
    form.set_field(Field::Cvv, "557");
    form.set_field(Field::FirstName, "John");
    form.set_field(Field::LastName, "Doe");
    let outcome = form.submit();
    show(&form, &outcome);

    // -------------------------------------------------------------------------
    // Several mistakes at once
    // -------------------------------------------------------------------------
    println!("Typo in number, bad date, bad last name:");
    form.set_field(Field::CardNumber, "323123123123");
    form.set_field(Field::ExpDate, "02/D2");
    form.set_field(Field::Cvv, "5571");
    form.set_field(Field::LastName, "& Daniel");
    let outcome = form.submit();
    show(&form, &outcome);

    println!(
        "Issuer remembered from the first submission: {:?}\n",
        form.validator().issuer()
    );

    // -------------------------------------------------------------------------
    // Strict mode forgets the issuer between submissions
    // -------------------------------------------------------------------------
    println!("Same mistakes, strict validator:");
    let mut strict = PaymentForm::with_options(clock, ValidatorOptions::strict());
    for field in Field::ALL {
        strict.set_field(field, form.value(field));
    }
    let outcome = strict.submit();
    show(&strict, &outcome);
}
