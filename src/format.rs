//! Properties Format Specification
//!
//! This module documents the line-oriented text format as implemented by
//! this library.
//!
//! # Overview
//!
//! The format is the classic `.properties` shape: one `KEY=VALUE` pair per
//! line, `#` comments, and dotted keys expressing hierarchy. It binds
//! bidirectionally to typed Rust data through serde.
//!
//! # Lines
//!
//! - Line terminator: `\n`. CRLF input is accepted (the trailing `\r` is
//!   absorbed as whitespace); the encoder emits LF only.
//! - Each line is trimmed of surrounding whitespace before interpretation.
//! - Blank lines are skipped.
//! - A line whose first non-whitespace character is `#` is a comment and is
//!   skipped. The encoder never emits comments.
//! - Every other line must contain `=`; the first `=` splits key from value,
//!   and both sides are trimmed. A line without `=` is an error.
//!
//! # Keys
//!
//! A key is one or more non-empty segments joined by `.`. Segments exclude
//! `=`, `#`, `.`, and the line terminator. Segment roles, resolved against
//! the target record:
//!
//! ```text
//! name=Alice            scalar field "name"
//! server.host=10.0.0.1  field "host" of nested record "server"
//! props.editor=vim      entry "editor" of mapping field "props"
//! tags[0]=a             element 0 of sequence field "tags"
//! ```
//!
//! The decoder allows one exception to segment non-emptiness: a mapping
//! line with nothing after the field name (`props.=x`, or a bare `props=x`
//! aimed at a mapping field) installs the empty-string entry key.
//!
//! A mapping entry key is the *entire* remainder after the mapping field's
//! own segment: `props.a.b=x` installs the entry `"a.b"`. Mappings of
//! mappings are therefore not expressible.
//!
//! # Values
//!
//! The scalar universe and its textual forms:
//!
//! | Type | Form | Example |
//! |------|------|---------|
//! | String | verbatim text after the `=` | `name=John Doe` |
//! | Boolean | `true` / `false` on encode; `1 t T TRUE true True` and `0 f F FALSE false False` accepted on decode | `active=true` |
//! | Integer | base-10, optional `-`, 64-bit intermediate | `age=-30` |
//! | Unsigned | base-10, 64-bit intermediate | `count=18446744073709551615` |
//! | Float | shortest round-trip form, 64-bit intermediate | `ratio=2.5` |
//!
//! No escaping is applied beyond the rules above; values containing `\n`
//! are the caller's responsibility. Binary values are unsupported.
//!
//! # Sequences
//!
//! Two wire forms exist, selected on encode by
//! [`SequenceStyle`](crate::SequenceStyle):
//!
//! ```text
//! tags[0]=go          # Indexed (default)
//! tags[1]=testing
//!
//! tags=go,testing     # CommaJoined
//! ```
//!
//! The decoder accepts either: indexed lines aggregate in index order, and a
//! plain line is split on commas with each element whitespace-trimmed. A
//! later non-indexed line replaces the whole sequence; there is no append.
//!
//! # Records and mappings
//!
//! - Record fields encode in declaration order; output is deterministic.
//! - Mapping entries encode one line per entry, in the mapping's iteration
//!   order, which is unspecified but stable within one call.
//! - Duplicate scalar keys and duplicate mapping entry keys resolve
//!   last-write-wins on decode.
//! - Unknown top-level keys are ignored by default (forward compatibility);
//!   strict mode turns them into errors.
//!
//! # Field metadata
//!
//! Per-field options ride in the field name via `#[serde(rename = "...")]`,
//! parsed as a comma-separated tag:
//!
//! ```text
//! #[serde(rename = "userName")]            name override
//! #[serde(rename = "port,omitempty")]      elide when zero-valued
//! #[serde(rename = "-")]                   invisible in both directions
//! ```
//!
//! See [`FieldTag`](crate::FieldTag) for the exact grammar.
