// Boilerplate emitted into every scaffolded project.
//
// Templated bodies carry `{{key}}` placeholders resolved through an
// explicit substitution map rather than inline string concatenation,
// so nothing reaches a generated manifest unnoticed.

use std::collections::HashMap;

use crate::utils::error::{Result, StackgenError};

/// A fixed file body, optionally with `{{key}}` placeholders
#[derive(Debug, Clone, Copy)]
pub struct Template {
    content: &'static str,
}

impl Template {
    pub const fn new(content: &'static str) -> Self {
        Self { content }
    }

    /// Substitute every placeholder; leftovers are a programming error
    /// surfaced as a validation failure rather than shipped to disk.
    pub fn render(&self, vars: &HashMap<&str, &str>) -> Result<String> {
        let mut out = self.content.to_string();
        for (key, value) in vars {
            out = out.replace(&format!("{{{{{}}}}}", key), value);
        }

        if out.contains("{{") {
            return Err(StackgenError::ValidationError(format!(
                "template has unresolved placeholders (provided: {:?})",
                vars.keys().collect::<Vec<_>>()
            )));
        }

        Ok(out)
    }

    /// Body of a template with no placeholders
    pub fn fixed(&self) -> &'static str {
        self.content
    }
}

/// Go module manifest, pinned to the chi/pgx/goose stack
pub const GO_MOD: Template = Template::new(
    r#"module github.com/yourusername/{{name}}

go 1.21

require (
	github.com/go-chi/chi/v5 v5.0.9
	github.com/jackc/pgx/v5 v5.5.4
	github.com/pressly/goose/v3 v3.12.0
)
"#,
);

/// Server entry point: chi router serving ./ui/static on :4000.
/// Identical for every project; the name is deliberately not embedded.
pub const MAIN_GO: Template = Template::new(
    r#"package main

import (
	"log"
	"net/http"

	"github.com/go-chi/chi/v5"
)

func main() {
	r := chi.NewRouter()
	r.Get("/*", http.FileServer(http.Dir("./ui/static")).ServeHTTP)

	log.Println("Server started on :4000")
	http.ListenAndServe(":4000", r)
}"#,
);

/// Postgres 15 compose file with the project name as the database name
pub const DOCKER_COMPOSE: Template = Template::new(
    r#"version: '3.8'

services:
  db:
    image: postgres:15
    restart: always
    environment:
      POSTGRES_USER: postgres
      POSTGRES_PASSWORD: postgres
      POSTGRES_DB: {{name}}
    ports:
      - "5432:5432"
    volumes:
      - pgdata:/var/lib/postgresql/data

volumes:
  pgdata:
"#,
);

pub const README: Template = Template::new(
    r#"# {{name}}

Golang (Chi) + React + Tailwind + Postgres project scaffold.
"#,
);

/// Replaces the config `tailwindcss init` generates
pub const TAILWIND_CONFIG: Template = Template::new(
    r#"import type { Config } from 'tailwindcss'

const config: Config = {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}"
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
export default config
"#,
);

pub const INDEX_CSS: Template = Template::new(
    r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn name_vars(name: &str) -> HashMap<&str, &str> {
        let mut vars = HashMap::new();
        vars.insert("name", name);
        vars
    }

    #[test]
    fn test_render_substitutes_placeholder() {
        let template = Template::new("module github.com/yourusername/{{name}}\n");
        let rendered = template.render(&name_vars("demo")).unwrap();
        assert_eq!(rendered, "module github.com/yourusername/demo\n");
    }

    #[test]
    fn test_render_substitutes_every_occurrence() {
        let template = Template::new("{{name}} and {{name}}");
        let rendered = template.render(&name_vars("demo")).unwrap();
        assert_eq!(rendered, "demo and demo");
    }

    #[test]
    fn test_render_rejects_unresolved_placeholders() {
        let template = Template::new("db: {{database}}");
        let result = template.render(&name_vars("demo"));
        assert!(result.is_err());
    }

    #[test]
    fn test_go_mod_embeds_name_in_module_path() {
        let rendered = GO_MOD.render(&name_vars("demo")).unwrap();
        assert!(rendered.contains("module github.com/yourusername/demo"));
        assert!(rendered.contains("github.com/go-chi/chi/v5"));
    }

    #[test]
    fn test_docker_compose_embeds_name_as_database() {
        let rendered = DOCKER_COMPOSE.render(&name_vars("demo")).unwrap();
        assert!(rendered.contains("POSTGRES_DB: demo"));
        assert!(rendered.contains("image: postgres:15"));
    }

    #[test]
    fn test_readme_starts_with_name_heading() {
        let rendered = README.render(&name_vars("demo")).unwrap();
        assert!(rendered.starts_with("# demo\n"));
    }

    #[test]
    fn test_static_templates_carry_no_placeholders() {
        assert!(!MAIN_GO.fixed().contains("{{"));
        assert!(!TAILWIND_CONFIG.fixed().contains("{{"));
        assert!(!INDEX_CSS.fixed().contains("{{"));
    }
}
