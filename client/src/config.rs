use std::path::PathBuf;

use homedir::my_home;
use libscrawl::event::Rgba;
use serde::{Deserialize, Serialize};

fn scrawl_dir() -> PathBuf {
    let mut path = my_home()
        .expect("Failed to get home directory")
        .expect("Home directory not found");
    path.push(".scrawl");
    path
}

/// Client settings persisted between sessions.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Host to connect to when none is given on the command line.
    default_host: Option<String>,
    /// Pen color restored at startup.
    pen_color: Option<Rgba>,
}

impl Config {
    /// Load the configuration from a file and create it if it doesn't exist
    pub fn load() -> Self {
        let path = scrawl_dir().join("config.json");
        if !path.exists() {
            std::fs::create_dir_all(scrawl_dir()).expect("Failed to create .scrawl directory");
            std::fs::File::create(&path).expect("Failed to create config.json file");
        }
        // Load the file and parse it into a Config struct
        let file = std::fs::File::open(&path).expect("Failed to open config.json file");
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader).unwrap_or_else(|_| Config::default())
    }

    /// Save the configuration to a file
    pub fn save(&self) {
        let path = scrawl_dir().join("config.json");
        let file = std::fs::File::create(&path).expect("Failed to create config.json file");
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).expect("Failed to save config.json file");
    }

    pub fn default_host(&self) -> Option<&str> {
        self.default_host.as_deref()
    }

    pub fn pen_color(&self) -> Option<Rgba> {
        self.pen_color
    }

    /// Remember the host and pen color for the next session
    pub fn remember(&mut self, host: String, color: Rgba) {
        self.default_host = Some(host);
        self.pen_color = Some(color);
        self.save();
    }
}
