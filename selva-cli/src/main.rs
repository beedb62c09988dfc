//! Selva CLI
//!
//! Builds a CSS selector from command-line tokens and prints the
//! serialized result.
//!
//! Tokens are read left to right. A `kind=value` token appends a fragment
//! to the current compound selector; a combinator token (`>`, `+`, `~`, or
//! the word `descendant`) closes the current compound and joins it to the
//! next one:
//!
//! ```text
//! selva element=div id=main '+' element=table id=data '~' element=tr
//! ```

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use owo_colors::OwoColorize;
use selva_selector::{Combinator, CompoundSelector, FragmentKind, Selector, combine};

#[derive(Parser, Debug)]
#[command(name = "selva")]
struct Cli {
    /// Fragment tokens (`kind=value`) and combinator tokens (`>`, `+`,
    /// `~`, or `descendant`), read left to right.
    ///
    /// Kinds: element, id, class, attr (or attribute), pseudo-class,
    /// pseudo-element. The value is split from the kind on the first `=`
    /// only, so `attr=href$=.png` keeps its inner `=`.
    #[arg(required = true)]
    tokens: Vec<String>,

    /// Also print the selector structure as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let selector = build_selector(&cli.tokens)?;

    println!("{}", selector.green().bold());

    if cli.json {
        let dump = serde_json::to_string_pretty(&selector)
            .context("failed to encode selector structure")?;
        println!("\n=== Structure ===");
        println!("{dump}");
    }

    Ok(())
}

/// Fold the token list into a selector, left to right.
///
/// Compounds accumulate fragment by fragment; each combinator token joins
/// everything built so far with the compound that follows it, so
/// `A + B ~ C` becomes `(A + B) ~ C`. Serialization walks trees in order,
/// which makes the left fold render exactly as typed.
fn build_selector<S: AsRef<str>>(tokens: &[S]) -> Result<Selector> {
    let mut pending: Option<(Selector, Combinator)> = None;
    let mut current = CompoundSelector::new();

    for token in tokens {
        let token = token.as_ref();

        if let Some(operator) = parse_combinator(token) {
            ensure!(
                !current.is_empty(),
                "combinator '{token}' must follow at least one fragment"
            );
            let left = match pending.take() {
                Some((done, prev)) => Selector::from(combine(done, prev, current)),
                None => Selector::from(current),
            };
            pending = Some((left, operator));
            current = CompoundSelector::new();
        } else {
            let Some((name, value)) = token.split_once('=') else {
                bail!("expected kind=value or a combinator, got '{token}'");
            };
            let Some(kind) = parse_kind(name) else {
                bail!("unknown fragment kind '{name}' in '{token}'");
            };
            current = current
                .append(kind, value)
                .with_context(|| format!("cannot append '{token}'"))?;
        }
    }

    ensure!(
        !current.is_empty(),
        "selector may not end with a combinator"
    );

    Ok(match pending {
        Some((done, operator)) => Selector::from(combine(done, operator, current)),
        None => Selector::from(current),
    })
}

/// Map a combinator token to its operator.
///
/// The descendant combinator has no symbol of its own, so the word
/// `descendant` stands in for it on the command line.
fn parse_combinator(token: &str) -> Option<Combinator> {
    match token {
        "descendant" => Some(Combinator::Descendant),
        ">" => Some(Combinator::Child),
        "+" => Some(Combinator::NextSibling),
        "~" => Some(Combinator::SubsequentSibling),
        _ => None,
    }
}

/// Map a kind name from a `kind=value` token to its fragment kind.
fn parse_kind(name: &str) -> Option<FragmentKind> {
    match name {
        "element" => Some(FragmentKind::Element),
        "id" => Some(FragmentKind::Id),
        "class" => Some(FragmentKind::Class),
        "attr" | "attribute" => Some(FragmentKind::Attribute),
        "pseudo-class" => Some(FragmentKind::PseudoClass),
        "pseudo-element" => Some(FragmentKind::PseudoElement),
        _ => None,
    }
}
