//! Settings record for the fieldbind demo application.
//!
//! Two levels deep to show how names compose:
//!
//! | Field                   | Flag                | Prompt path             |
//! |-------------------------|---------------------|-------------------------|
//! | `name`                  | `--name`            | `Name`                  |
//! | `verbose`               | `--verbose`         | `Verbose`               |
//! | `contact`               | `--contact`         | `Contact`               |
//! | `server.host`           | `--server-host`     | `Server.Host`           |
//! | `server.port`           | `--server-port`     | `Server.Port`           |
//! | `server.timeout`        | `--server-timeout`  | `Server.Timeout`        |
//! | `server.upstreams`      | `--server-upstreams`| `Server.Upstreams`      |
//! | `server.token`          | (none)              | `Server.Token`          |
//! | `display.color`         | `--color`           | `Display.Color`         |

use std::time::Duration;

use fieldbind::{FieldSet, Record};
use url::Url;

/// Root settings for the demo application.
#[derive(Debug)]
pub struct DemoConfig {
    pub name: String,
    pub verbose: bool,
    pub contact: String,
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

#[derive(Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub upstreams: Vec<Url>,
    pub token: Option<String>,
}

#[derive(Debug)]
pub struct DisplayConfig {
    pub color: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "fieldbind-demo".into(),
            verbose: false,
            contact: String::new(),
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
                timeout: Duration::from_secs(30),
                upstreams: Vec::new(),
                token: None,
            },
            display: DisplayConfig {
                color: "yellow".into(),
            },
        }
    }
}

impl Record for DemoConfig {
    fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
        f.field("Name", &mut self.name)
            .tag("flag", "name,application name shown in the banner")
            .tag("ask", "any,application name");
        f.field("Verbose", &mut self.verbose)
            .tag("flag", "verbose,also print the JSON summary")
            .tag("ask", "any,true or false");
        f.field("Contact", &mut self.contact)
            .tag("flag", "contact,operator email address")
            .tag("ask", "email,operator email address");
        f.nested("Server", &mut self.server).tag("flag", "server-");
        f.nested("Display", &mut self.display);
    }
}

impl Record for ServerConfig {
    fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
        f.field("Host", &mut self.host)
            .tag("flag", "host,address to bind")
            .tag("ask", "any,address to bind");
        f.field("Port", &mut self.port)
            .tag("flag", "port,port to listen on")
            .tag("ask", "any,port to listen on");
        f.field("Timeout", &mut self.timeout)
            .tag("flag", "timeout,request timeout")
            .tag("ask", "any,request timeout such as 30s or 2m");
        f.field("Upstreams", &mut self.upstreams)
            .tag("flag", "upstreams,upstream base URLs")
            .tag("sep", " ")
            .tag("ask", "any,space separated URLs");
        f.field("Token", &mut self.token).tag("ask", "secret,API token");
    }
}

impl Record for DisplayConfig {
    fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
        f.field("Color", &mut self.color)
            .tag("flag", "color,output color (red, green, yellow, blue, magenta, cyan)")
            .tag("ask", "any,output color");
    }
}
