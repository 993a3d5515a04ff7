//! `generator generate-*` commands.

use std::io::Write;

use tracing::debug;

use crate::context::ServiceContext;
use crate::error::GeneratorError;
use crate::generate::{entity, individual, random_id, time_ordered, GenerationRequest};

/// Which identifier a generation command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Individual taxpayer number (CPF).
    Individual(GenerationRequest),
    /// Entity taxpayer number (CNPJ).
    Entity(GenerationRequest),
    /// Random UUID v4 layout.
    Random,
    /// Time-ordered UUID v6 layout.
    TimeOrdered,
}

impl IdKind {
    /// Short name used in the clipboard confirmation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual(_) => "CPF",
            Self::Entity(_) => "CNPJ",
            Self::Random => "UUID v4",
            Self::TimeOrdered => "UUID v6",
        }
    }

    /// Draws a fresh value from the context's ports.
    #[must_use]
    pub fn produce(self, ctx: &ServiceContext) -> String {
        match self {
            Self::Individual(request) => individual::generate(ctx.random.as_ref(), request),
            Self::Entity(request) => entity::generate(ctx.random.as_ref(), request),
            Self::Random => random_id::generate(ctx.random.as_ref()),
            Self::TimeOrdered => time_ordered::generate(ctx.clock.as_ref(), ctx.random.as_ref()),
        }
    }
}

/// Execute a generation command.
///
/// With `print_only` the value goes to `out`; otherwise it is copied to the
/// clipboard and a confirmation line goes to `out`.
///
/// # Errors
///
/// Returns an error if the clipboard copy or the write to `out` fails.
pub fn run(
    ctx: &ServiceContext,
    kind: IdKind,
    print_only: bool,
    out: &mut dyn Write,
) -> Result<(), GeneratorError> {
    let value = kind.produce(ctx);
    if print_only {
        writeln!(out, "{value}")?;
        return Ok(());
    }

    ctx.clipboard.copy(&value).map_err(GeneratorError::Clipboard)?;
    debug!(kind = kind.label(), "copied to clipboard");
    writeln!(out, "{} copied to clipboard!", kind.label())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::{
        FixedClock, FixedPrivileges, MemoryClipboard, MemoryFileSystem, ScriptedPrompt,
        ScriptedRandom, UnavailableClipboard,
    };
    use crate::ports::Clipboard;

    fn context(random: ScriptedRandom, clipboard: Box<dyn Clipboard>) -> ServiceContext {
        ServiceContext {
            clock: Box::new(FixedClock::new(
                chrono::DateTime::from_timestamp_micros(1_700_000_000_123_456).unwrap(),
            )),
            random: Box::new(random),
            clipboard,
            fs: Box::new(MemoryFileSystem::default()),
            privileges: Box::new(FixedPrivileges(false)),
            prompt: Box::new(ScriptedPrompt::answering(false)),
        }
    }

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn print_only_writes_value() {
        let ctx = context(
            ScriptedRandom::new([5, 2, 9, 9, 8, 2, 2, 4, 7]),
            Box::new(UnavailableClipboard),
        );
        let mut out = Vec::new();
        run(&ctx, IdKind::Individual(GenerationRequest::formatted()), true, &mut out).unwrap();
        assert_eq!(output(out), "529.982.247-25\n");
    }

    #[test]
    fn no_format_strips_punctuation() {
        let ctx = context(
            ScriptedRandom::new([1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            Box::new(UnavailableClipboard),
        );
        let mut out = Vec::new();
        run(&ctx, IdKind::Entity(GenerationRequest::raw()), true, &mut out).unwrap();
        assert_eq!(output(out), "11222333000181\n");
    }

    #[test]
    fn time_ordered_uses_context_clock() {
        let ctx = context(
            ScriptedRandom::new([0x0123, 0xabcd_ef01_2345]),
            Box::new(UnavailableClipboard),
        );
        let mut out = Vec::new();
        run(&ctx, IdKind::TimeOrdered, true, &mut out).unwrap();
        assert_eq!(output(out), "0060a241-8202-6240-8123-abcdef012345\n");
    }

    #[test]
    fn default_copies_and_confirms() {
        let clipboard = std::sync::Arc::new(MemoryClipboard::new());
        let ctx = context(ScriptedRandom::new([0; 32]), Box::new(SharedClipboard(clipboard.clone())));
        let mut out = Vec::new();
        run(&ctx, IdKind::Random, false, &mut out).unwrap();
        assert_eq!(output(out), "UUID v4 copied to clipboard!\n");
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("00000000-0000-4000-0000-000000000000")
        );
    }

    #[test]
    fn clipboard_failure_is_reported() {
        let ctx = context(ScriptedRandom::new([0; 9]), Box::new(UnavailableClipboard));
        let mut out = Vec::new();
        let err = run(&ctx, IdKind::Individual(GenerationRequest::formatted()), false, &mut out)
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Clipboard(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn labels_match_confirmations() {
        assert_eq!(IdKind::Individual(GenerationRequest::raw()).label(), "CPF");
        assert_eq!(IdKind::Entity(GenerationRequest::raw()).label(), "CNPJ");
        assert_eq!(IdKind::Random.label(), "UUID v4");
        assert_eq!(IdKind::TimeOrdered.label(), "UUID v6");
    }

    struct SharedClipboard(std::sync::Arc<MemoryClipboard>);

    impl Clipboard for SharedClipboard {
        fn copy(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.0.copy(text)
        }
    }
}
