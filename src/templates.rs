use crate::format::Format;
use serde::Serialize;

/// A ready-made structure description users can start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub content: &'static str,
    pub format: Format,
}

static TEMPLATES: &[Template] = &[
    Template {
        id: "react-vite",
        name: "React + Vite",
        description: "Frontend app with React and Vite.",
        content: r##"{
  "src": {
    "assets": [],
    "components": {
      "HelloWorld.jsx": null
    },
    "App.jsx": null,
    "index.css": null,
    "main.jsx": null
  },
  "public": {
    "vite.svg": null
  },
  "index.html": null,
  "package.json": "{\n  \"name\": \"react-vite-project\",\n  \"private\": true,\n  \"type\": \"module\",\n  \"scripts\": {\n    \"dev\": \"vite\",\n    \"build\": \"vite build\"\n  }\n}\n",
  "README.md": "# React + Vite Project\n"
}"##,
        format: Format::Json,
    },
    Template {
        id: "express-js",
        name: "Node.js + Express",
        description: "Backend layout for an Express API.",
        content: "src/\n  controllers/\n    userController.js\n  models/\n    userModel.js\n  routes/\n    userRoutes.js\n  app.js\n  server.js\n.env\n.gitignore\npackage.json\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "spring-boot",
        name: "Spring Boot API",
        description: "Maven project for a Spring Boot REST API.",
        content: "src/\n  main/\n    java/\n      com/\n        example/\n          demo/\n            controller/\n              ApiController.java\n            model/\n              Item.java\n            service/\n              ApiService.java\n            DemoApplication.java\n    resources/\n      application.properties\n  test/\n    java/\n      com/\n        example/\n          demo/\n            DemoApplicationTests.java\npom.xml\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "django-project",
        name: "Django Project",
        description: "Django project with a single app.",
        content: "myproject/\n  __init__.py\n  asgi.py\n  settings.py\n  urls.py\n  wsgi.py\nmyapp/\n  __init__.py\n  admin.py\n  apps.py\n  migrations/\n    __init__.py\n  models.py\n  tests.py\n  views.py\n  urls.py\nmanage.py\nrequirements.txt\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "flask-api",
        name: "Python Flask API",
        description: "Minimal Flask application for a REST API.",
        content: "app/\n  __init__.py\n  routes.py\n  models.py\ninstance/\n  config.py\nconfig.py\nrequirements.txt\nrun.py\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "go-gin-api",
        name: "Go Gin API",
        description: "REST API using the Gin framework.",
        content: "cmd/\n  api/\n    main.go\ninternal/\n  handlers/\n    item_handler.go\n  models/\n    item.go\n  routes/\n    routes.go\n.gitignore\ngo.mod\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "rust-cli",
        name: "Rust CLI",
        description: "Command line tool with a library crate and integration tests.",
        content: "src/\n  main.rs\n  lib.rs\n  config.rs\ntests/\n  cli.rs\n.gitignore\nCargo.toml\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "electron-app",
        name: "Electron App",
        description: "Desktop application using Electron.",
        content: r##"{
  "src": {
    "main.js": "// Main process\n",
    "preload.js": "// Preload script\n",
    "renderer.js": "// Renderer process\n"
  },
  "index.html": null,
  "package.json": null,
  "README.md": "# Electron App\n"
}"##,
        format: Format::Json,
    },
    Template {
        id: "python-datascience",
        name: "Python Data Science Project",
        description: "Data, notebooks and source layout for analysis work.",
        content: "data/\n  raw/\n  processed/\nnotebooks/\n  1.0-data-exploration.ipynb\nsrc/\n  __init__.py\n  data/\n    make_dataset.py\n  features/\n    build_features.py\n  models/\n    train_model.py\n    predict_model.py\n.gitignore\nrequirements.txt\nREADME.md",
        format: Format::IndentedText,
    },
    Template {
        id: "docker-compose-app",
        name: "Docker Compose App",
        description: "Backend and frontend containers wired with Docker Compose.",
        content: r##"{
  "backend": {
    "Dockerfile": null,
    "app.py": null,
    "requirements.txt": null
  },
  "frontend": {
    "Dockerfile": null,
    "src": [],
    "package.json": null
  },
  "docker-compose.yml": "services:\n  backend:\n    build: ./backend\n  frontend:\n    build: ./frontend\n",
  "README.md": "# Docker Compose App\n"
}"##,
        format: Format::Json,
    },
    Template {
        id: "kubernetes-manifests",
        name: "Kubernetes Manifests",
        description: "Kustomize base with staging and production overlays.",
        content: "base/\n  deployment.yaml\n  service.yaml\n  kustomization.yaml\noverlays/\n  production/\n    kustomization.yaml\n    patch.yaml\n  staging/\n    kustomization.yaml\n    patch.yaml\nREADME.md",
        format: Format::IndentedText,
    },
];

/// The whole catalogue, in display order
pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Look up a template by id
pub fn find(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::detect;
    use crate::generator::Generator;
    use std::collections::HashSet;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = all().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_declared_format_matches_content() {
        for template in all() {
            assert_eq!(detect(template.content), template.format, "{}", template.id);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("express-js").map(|t| t.name), Some("Node.js + Express"));
        assert!(find("cobol-mainframe").is_none());
    }

    #[test]
    fn test_embedded_file_bodies_are_written_with_inline_content() {
        let scratch = TempDir::new().unwrap();
        let generator = Generator::builder()
            .scratch_parent(scratch.path())
            .inline_json_content(true)
            .build();

        let template = find("react-vite").unwrap();
        let result = generator.generate(template.content).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(result.bytes)).unwrap();

        let mut readme = String::new();
        archive
            .by_name("README.md")
            .unwrap()
            .read_to_string(&mut readme)
            .unwrap();
        assert_eq!(readme, "# React + Vite Project\n");

        let mut package = String::new();
        archive
            .by_name("package.json")
            .unwrap()
            .read_to_string(&mut package)
            .unwrap();
        assert!(package.contains("\"name\": \"react-vite-project\""));
    }

    #[test]
    fn test_every_template_generates() {
        let scratch = TempDir::new().unwrap();
        let generator = Generator::builder()
            .scratch_parent(scratch.path())
            .build();

        for template in all() {
            let result = generator.generate(template.content).unwrap();
            assert_eq!(result.format, template.format, "{}", template.id);
            assert!(result.entry_count > 0, "{}", template.id);
            assert_eq!(result.stats.skipped, 0, "{}", template.id);
        }
    }
}
