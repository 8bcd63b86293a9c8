// Dweve HALE - HAL Entities
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Inspect command - HAL structure visualization

use super::read_resource;
use crate::error::CliError;
use colored::Colorize;
use hale_core::{EmbeddedValue, Link, LinkValue, Resource, ResourceOptions};

/// Display the links and embedded resources of a HAL document as a tree.
///
/// In verbose mode attribute values and every link property are shown.
///
/// # Examples
///
/// ```no_run
/// use hale_cli::commands::inspect;
///
/// # fn main() -> Result<(), hale_cli::error::CliError> {
/// inspect("user.json", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let resource = read_resource(file, ResourceOptions::default())?;

    println!("{}", "HAL Resource".bold().underline());
    print_resource(&resource, 1, verbose);

    Ok(())
}

fn print_resource(resource: &Resource, indent: usize, verbose: bool) {
    let prefix = "  ".repeat(indent);

    if verbose {
        for (key, value) in resource.attributes() {
            println!("{}{}: {}", prefix, key.yellow(), value);
        }
    } else if !resource.attributes().is_empty() {
        println!(
            "{}{} {}",
            prefix,
            "Attributes:".cyan(),
            resource.attributes().len()
        );
    }

    if !resource.links().is_empty() {
        println!("{}{}", prefix, "Links:".cyan());
        for (rel, value) in resource.links().iter() {
            match value {
                LinkValue::Link(link) => {
                    println!("{}  {}: {}", prefix, rel.green(), format_link(link, verbose));
                }
                LinkValue::Array(links) => {
                    println!("{}  {}: [{} links]", prefix, rel.green(), links.len());
                    for link in links {
                        println!("{}    - {}", prefix, format_link(link, verbose));
                    }
                }
                LinkValue::Null => println!("{}  {}: {}", prefix, rel.green(), "null".dimmed()),
            }
        }
    }

    if !resource.embedded().is_empty() {
        println!("{}{}", prefix, "Embedded:".cyan());
        for (rel, value) in resource.embedded().iter() {
            match value {
                EmbeddedValue::Resource(child) => {
                    println!("{}  {}:", prefix, rel.green());
                    print_resource(child, indent + 2, verbose);
                }
                EmbeddedValue::Resources(children) => {
                    println!("{}  {}: [{} resources]", prefix, rel.green(), children.len());
                    for (i, child) in children.iter().enumerate() {
                        println!("{}    [{}]", prefix, i);
                        print_resource(child, indent + 3, verbose);
                    }
                }
                EmbeddedValue::Null => println!("{}  {}: {}", prefix, rel.green(), "null".dimmed()),
            }
        }
    }
}

fn format_link(link: &Link, verbose: bool) -> String {
    let mut out = link.href().to_string();
    if link.is_templated() {
        out.push_str(&format!(" {}", "(templated)".magenta()));
    }
    if let Some(name) = link.name() {
        out.push_str(&format!(" name={}", name));
    }
    if verbose {
        let optional = [
            ("title", link.title()),
            ("type", link.media_type()),
            ("hreflang", link.hreflang()),
            ("profile", link.profile()),
            ("deprecation", link.deprecation()),
        ];
        for (key, value) in optional.iter().filter_map(|(k, v)| v.map(|v| (k, v))) {
            out.push_str(&format!(" {}={}", key, value));
        }
    }
    out
}
