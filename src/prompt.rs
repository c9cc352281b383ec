use rand::Rng;

/// The fixed set of practice prompts. Never parsed; the string is only
/// displayed for the user to sketch against.
pub const CATALOG: &[&str] = &[
    "a*",
    "ab+",
    "(a|b)*",
    "ab*",
    "a(b|c)+",
    "a(b|c)*",
    "a*b+",
    "ab",
    "a(a|b)+",
    "a|b",
];

/// Picks one catalog entry uniformly at random.
pub fn random_prompt() -> &'static str {
    let mut rng = rand::thread_rng();
    CATALOG[rng.gen_range(0..CATALOG.len())]
}
