#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use regex::Regex;
    use url::Url;

    use crate::walk::{FieldSet, Record};

    /// One field of every base type, held by value.
    #[derive(Debug)]
    pub struct Values {
        pub string: String,
        pub boolean: bool,
        pub isize: isize,
        pub i8: i8,
        pub i16: i16,
        pub i32: i32,
        pub i64: i64,
        pub usize: usize,
        pub u8: u8,
        pub u16: u16,
        pub u32: u32,
        pub u64: u64,
        pub f32: f32,
        pub f64: f64,
        pub char: char,
        pub duration: Duration,
        pub url: Url,
        pub regex: Regex,
    }

    impl Default for Values {
        fn default() -> Self {
            Self {
                string: String::new(),
                boolean: false,
                isize: 0,
                i8: 0,
                i16: 0,
                i32: 0,
                i64: 0,
                usize: 0,
                u8: 0,
                u16: 0,
                u32: 0,
                u64: 0,
                f32: 0.0,
                f64: 0.0,
                char: '\0',
                duration: Duration::ZERO,
                url: Url::parse("http://localhost/").unwrap(),
                regex: Regex::new("").unwrap(),
            }
        }
    }

    impl Record for Values {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("String", &mut self.string)
                .tag("flag", "string")
                .tag("ask", "email");
            f.field("Bool", &mut self.boolean)
                .tag("flag", "bool")
                .tag("ask", "any,bool value");
            f.field("Isize", &mut self.isize).tag("flag", "isize");
            f.field("I8", &mut self.i8).tag("flag", "i8");
            f.field("I16", &mut self.i16).tag("flag", "i16");
            f.field("I32", &mut self.i32).tag("flag", "i32");
            f.field("I64", &mut self.i64).tag("flag", "i64");
            f.field("Usize", &mut self.usize).tag("flag", "usize");
            f.field("U8", &mut self.u8).tag("flag", "u8");
            f.field("U16", &mut self.u16).tag("flag", "u16");
            f.field("U32", &mut self.u32).tag("flag", "u32");
            f.field("U64", &mut self.u64).tag("flag", "u64");
            f.field("F32", &mut self.f32).tag("flag", "f32");
            f.field("F64", &mut self.f64).tag("flag", "f64");
            f.field("Char", &mut self.char).tag("flag", "char");
            f.field("Duration", &mut self.duration)
                .tag("flag", "duration")
                .tag("ask", "any,duration value");
            f.field("Url", &mut self.url)
                .tag("flag", "url,the help text")
                .tag("ask", "any,url value");
            f.field("Regex", &mut self.regex)
                .tag("flag", "regex,the help text");
        }
    }

    /// One `Option<T>` field of every base type.
    #[derive(Debug, Default)]
    pub struct Pointers {
        pub string: Option<String>,
        pub boolean: Option<bool>,
        pub isize: Option<isize>,
        pub i8: Option<i8>,
        pub i16: Option<i16>,
        pub i32: Option<i32>,
        pub i64: Option<i64>,
        pub usize: Option<usize>,
        pub u8: Option<u8>,
        pub u16: Option<u16>,
        pub u32: Option<u32>,
        pub u64: Option<u64>,
        pub f32: Option<f32>,
        pub f64: Option<f64>,
        pub char: Option<char>,
        pub duration: Option<Duration>,
        pub url: Option<Url>,
        pub regex: Option<Regex>,
    }

    impl Record for Pointers {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("String", &mut self.string)
                .tag("flag", "string-pointer")
                .tag("ask", "secret");
            f.field("Bool", &mut self.boolean).tag("flag", "bool-pointer");
            f.field("Isize", &mut self.isize).tag("flag", "isize-pointer");
            f.field("I8", &mut self.i8).tag("flag", "i8-pointer");
            f.field("I16", &mut self.i16).tag("flag", "i16-pointer");
            f.field("I32", &mut self.i32).tag("flag", "i32-pointer");
            f.field("I64", &mut self.i64).tag("flag", "i64-pointer");
            f.field("Usize", &mut self.usize).tag("flag", "usize-pointer");
            f.field("U8", &mut self.u8).tag("flag", "u8-pointer");
            f.field("U16", &mut self.u16).tag("flag", "u16-pointer");
            f.field("U32", &mut self.u32).tag("flag", "u32-pointer");
            f.field("U64", &mut self.u64).tag("flag", "u64-pointer");
            f.field("F32", &mut self.f32).tag("flag", "f32-pointer");
            f.field("F64", &mut self.f64).tag("flag", "f64-pointer");
            f.field("Char", &mut self.char).tag("flag", "char-pointer");
            f.field("Duration", &mut self.duration)
                .tag("flag", "duration-pointer");
            f.field("Url", &mut self.url)
                .tag("flag", "url-pointer,the help text");
            f.field("Regex", &mut self.regex)
                .tag("flag", "regex-pointer,the help text");
        }
    }

    /// One `Vec<T>` field of every base type.
    #[derive(Debug, Default)]
    pub struct Slices {
        pub string: Vec<String>,
        pub boolean: Vec<bool>,
        pub isize: Vec<isize>,
        pub i8: Vec<i8>,
        pub i16: Vec<i16>,
        pub i32: Vec<i32>,
        pub i64: Vec<i64>,
        pub usize: Vec<usize>,
        pub u8: Vec<u8>,
        pub u16: Vec<u16>,
        pub u32: Vec<u32>,
        pub u64: Vec<u64>,
        pub f32: Vec<f32>,
        pub f64: Vec<f64>,
        pub char: Vec<char>,
        pub duration: Vec<Duration>,
        pub url: Vec<Url>,
        pub regex: Vec<Regex>,
    }

    impl Record for Slices {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("String", &mut self.string)
                .tag("flag", "string-slice")
                .tag("ask", "any,string slice");
            f.field("Bool", &mut self.boolean).tag("flag", "bool-slice");
            f.field("Isize", &mut self.isize).tag("flag", "isize-slice");
            f.field("I8", &mut self.i8).tag("flag", "i8-slice");
            f.field("I16", &mut self.i16).tag("flag", "i16-slice");
            f.field("I32", &mut self.i32).tag("flag", "i32-slice");
            f.field("I64", &mut self.i64).tag("flag", "i64-slice");
            f.field("Usize", &mut self.usize).tag("flag", "usize-slice");
            f.field("U8", &mut self.u8).tag("flag", "u8-slice");
            f.field("U16", &mut self.u16)
                .tag("flag", "u16-slice")
                .tag("sep", "|");
            f.field("U32", &mut self.u32).tag("flag", "u32-slice");
            f.field("U64", &mut self.u64).tag("flag", "u64-slice");
            f.field("F32", &mut self.f32).tag("flag", "f32-slice");
            f.field("F64", &mut self.f64).tag("flag", "f64-slice");
            f.field("Char", &mut self.char).tag("flag", "char-slice");
            f.field("Duration", &mut self.duration)
                .tag("flag", "duration-slice");
            f.field("Url", &mut self.url)
                .tag("flag", "url-slice,the help text")
                .tag("sep", " ");
            f.field("Regex", &mut self.regex)
                .tag("flag", "regex-slice,the help text")
                .tag("sep", ";");
        }
    }

    /// Every shape of every type, plus one untagged field.
    #[derive(Debug, Default)]
    pub struct Flags {
        pub without_flag_tag: String,
        pub values: Values,
        pub pointers: Pointers,
        pub slices: Slices,
    }

    impl Record for Flags {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("WithoutFlagTag", &mut self.without_flag_tag);
            f.nested("Values", &mut self.values);
            f.nested("Pointers", &mut self.pointers);
            f.nested("Slices", &mut self.slices);
        }
    }

    // -- Nested prefixes -------------------------------------------------------

    #[derive(Debug, Default)]
    pub struct Options {
        pub port: u16,
    }

    impl Record for Options {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("Port", &mut self.port)
                .tag("flag", "port")
                .tag("ask", "any,port number");
        }
    }

    #[derive(Debug, Default)]
    pub struct Config {
        pub timeout: Duration,
    }

    impl Record for Config {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("Timeout", &mut self.timeout)
                .tag("flag", "timeout")
                .tag("ask", "secret");
        }
    }

    #[derive(Debug, Default)]
    pub struct NestedRoot {
        pub options: Options,
        pub config: Config,
    }

    impl Record for NestedRoot {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.nested("Options", &mut self.options);
            f.nested("Config", &mut self.config).tag("flag", "config-");
        }
    }

    // -- Invalid names and custom separators ------------------------------------

    #[derive(Debug)]
    pub struct Partial {
        pub address: String,
        pub level: String,
        pub owners: Vec<String>,
    }

    impl Default for Partial {
        fn default() -> Self {
            Self {
                address: String::new(),
                level: "info".to_string(),
                owners: Vec::new(),
            }
        }
    }

    impl Record for Partial {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("Address", &mut self.address)
                .tag("flag", "addr,listen address, host or ip")
                .tag("ask", "hostname,listen address");
            f.field("Level", &mut self.level)
                .tag("flag", "log level")
                .tag("ask", "any");
            f.field("Owners", &mut self.owners)
                .tag("flag", "owners")
                .tag("delim", ";")
                .tag("ask", "email,comma separated");
        }
    }

    // -- Enabled flag -----------------------------------------------------------

    #[derive(Debug, Default)]
    pub struct Toggle {
        pub enabled: bool,
        pub name: String,
    }

    impl Record for Toggle {
        fn fields<'a>(&'a mut self, f: &mut FieldSet<'a>) {
            f.field("Enabled", &mut self.enabled)
                .tag("flag", "enabled")
                .tag("ask", "any");
            f.field("Name", &mut self.name)
                .tag("flag", "name,who to greet")
                .tag("ask", "any,who to greet");
        }
    }

    #[test]
    fn fixtures_build() {
        let values = Values::default();
        assert_eq!(values.url.as_str(), "http://localhost/");
        assert_eq!(Partial::default().level, "info");
    }
}
