// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_concierge_message(entries: usize) -> String {
    let mut content = String::from("Good evening! Here is what I found for you.\n\n");

    content.push_str("Available Restaurants:\n");
    for i in 1..=entries {
        content.push_str(&format!(
            "{i}. **Restaurant {i}** (Floor {i}) - 5:00 PM - 11:00 PM\n"
        ));
    }

    content.push_str("\nAvailable Spa Services:\n");
    for i in 1..=entries {
        content.push_str(&format!(
            "**Treatment {i}** ({i}0 min) - Soothing treatment number {i} ${i}5\n"
        ));
    }

    content.push_str("\n✅ Restaurant reservation confirmed for 2 guests\n");
    content.push_str("✅ Spa appointment booked at 3pm\n");
    content.push_str("### Anything else I can help with?\n");
    content
}

#[allow(dead_code)]
pub fn generate_plain_message(paragraphs: usize) -> String {
    "The concierge desk is open around the clock. Ask about tours, dining and spa.\n\n"
        .repeat(paragraphs)
}
