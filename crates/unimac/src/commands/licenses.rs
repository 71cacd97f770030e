//! `unimac licenses`: this tool's license, then notices for the crates it
//! links directly.

const MIT_LICENSE: &str = "\
MIT License

Copyright (c) the unimac authors

Permission is hereby granted, free of charge, to any person obtaining
a copy of this software and associated documentation files (the
\"Software\"), to deal in the Software without restriction, including
without limitation the rights to use, copy, modify, merge, publish,
distribute, sublicense, and/or sell copies of the Software, and to
permit persons to whom the Software is furnished to do so, subject to
the following conditions:

The above copyright notice and this permission notice shall be
included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,
EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";

/// `(crate, SPDX license expression)` for every direct dependency.
const NOTICES: &[(&str, &str)] = &[
    ("chrono", "MIT OR Apache-2.0"),
    ("clap", "MIT OR Apache-2.0"),
    ("csv", "Unlicense OR MIT"),
    ("miette", "Apache-2.0"),
    ("reqwest", "MIT OR Apache-2.0"),
    ("rust_xlsxwriter", "MIT OR Apache-2.0"),
    ("secrecy", "Apache-2.0 OR MIT"),
    ("serde", "MIT OR Apache-2.0"),
    ("serde_json", "MIT OR Apache-2.0"),
    ("strum", "MIT"),
    ("tabled", "MIT"),
    ("thiserror", "MIT OR Apache-2.0"),
    ("tokio", "MIT"),
    ("tracing", "MIT"),
    ("tracing-subscriber", "MIT"),
    ("url", "MIT OR Apache-2.0"),
];

pub fn render() -> String {
    let mut text = format!("-- unimac --\n\n{MIT_LICENSE}\n-- Third-party crates --\n\n");
    let width = NOTICES.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, license) in NOTICES {
        text.push_str(&format!("{name:<width$}  {license}\n"));
    }
    text
}

pub fn handle() {
    print!("{}", render());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_own_license_before_dependencies() {
        let text = render();
        let own = text.find("MIT License").unwrap_or(usize::MAX);
        let deps = text.find("Third-party").unwrap_or(0);
        assert!(own < deps);
        assert!(text.contains("rust_xlsxwriter"));
        assert!(text.contains("tokio"));
    }
}
