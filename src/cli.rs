#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Prompt(String),
}

/// Joins all arguments into a single prompt; no arguments means help.
pub fn collect<I>(args: I) -> Invocation
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.is_empty() {
        Invocation::Help
    } else {
        Invocation::Prompt(args.join(" "))
    }
}
