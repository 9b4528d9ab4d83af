use relcalc_core::CalculationOutcome;
use relcalc_core::CopyPolicy;

pub fn print_info(message: &str) {
    println!("[relcalc][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[relcalc][ERROR]: {message}");
}

/// Prints one line per produced command in Set, Fill, Clone order.
pub fn print_outcome(outcome: &CalculationOutcome, policy: CopyPolicy) {
    if outcome.is_empty() {
        print_info("No command produced; origin and destination need three integers each");
        return;
    }
    for result in outcome.results() {
        println!("{}", policy.apply(&result.text()));
    }
}
