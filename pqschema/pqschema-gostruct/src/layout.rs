//! Whitespace layout of rendered Go source.
//!
//! The renderer emits a compact form: no indentation and single spaces
//! between name, type and tag. [`indent_go`] produces the gofmt-style
//! layout and [`compact_go`] maps it back.

/// Re-indents compact Go struct text with tabs and aligns field columns.
///
/// Consecutive fields at one depth form an alignment section. A field that
/// opens a nested struct joins the name column of the section before it and
/// ends that section; the fields after its closing brace start a new one.
pub fn indent_go(compact: &str) -> String {
    let mut out = String::with_capacity(compact.len() * 2);
    let mut depth = 0usize;
    let mut section: Vec<FieldLine<'_>> = Vec::new();

    for line in compact.lines() {
        let line = line.trim();
        match FieldLine::parse(line, depth) {
            Some(field) => {
                let opens_struct = field.opens_struct;
                section.push(field);
                if opens_struct {
                    flush_section(&mut out, &mut section, depth);
                    depth += 1;
                }
            }
            None => {
                flush_section(&mut out, &mut section, depth);
                if line.starts_with('}') {
                    depth = depth.saturating_sub(1);
                }
                push_indented(&mut out, depth, line);
                if line.ends_with('{') {
                    depth += 1;
                }
            }
        }
    }
    flush_section(&mut out, &mut section, depth);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

/// Strips indentation and alignment, the inverse of [`indent_go`].
///
/// Runs of spaces are squeezed only outside struct tags so that raw field
/// names inside tags are preserved.
pub fn compact_go(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| {
            let line = line.trim_matches(|c| c == '\t' || c == ' ');
            match line.find('`') {
                Some(i) => format!("{}{}", squeeze_spaces(&line[..i]), &line[i..]),
                None => squeeze_spaces(line),
            }
        })
        .collect();
    lines.join("\n").trim_end_matches('\n').to_string()
}

fn squeeze_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        let is_space = c == ' ' || c == '\t';
        if !(is_space && prev_space) {
            out.push(if is_space { ' ' } else { c });
        }
        prev_space = is_space;
    }
    out
}

struct FieldLine<'a> {
    name: &'a str,
    go_type: &'a str,
    tag: &'a str,
    /// `Name *struct {`: the type continues on the following lines.
    opens_struct: bool,
}

impl<'a> FieldLine<'a> {
    /// A field line inside a struct; closing lines and the top-level
    /// `type X struct {` line are not fields.
    fn parse(line: &'a str, depth: usize) -> Option<Self> {
        if depth == 0 || line.is_empty() || line.starts_with('}') {
            return None;
        }
        let (name, rest) = line.split_once(' ')?;
        if rest.ends_with('{') {
            return Some(Self {
                name,
                go_type: rest,
                tag: "",
                opens_struct: true,
            });
        }
        let (go_type, tag) = match rest.find(" `") {
            Some(i) => (&rest[..i], &rest[i + 1..]),
            None => (rest, ""),
        };
        Some(Self {
            name,
            go_type,
            tag,
            opens_struct: false,
        })
    }
}

fn flush_section(out: &mut String, section: &mut Vec<FieldLine<'_>>, depth: usize) {
    let name_width = section.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let type_width = section
        .iter()
        .filter(|f| !f.opens_struct)
        .map(|f| f.go_type.len())
        .max()
        .unwrap_or(0);
    for field in section.drain(..) {
        let line = if field.tag.is_empty() {
            format!("{:name_width$} {}", field.name, field.go_type)
        } else {
            format!(
                "{:name_width$} {:type_width$} {}",
                field.name, field.go_type, field.tag
            )
        };
        push_indented(out, depth, line.trim_end());
    }
}

fn push_indented(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push('\t');
    }
    out.push_str(line);
    out.push('\n');
}
