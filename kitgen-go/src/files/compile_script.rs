//! gRPC compile scripts.
//!
//! Each platform gets a fixed preamble describing how to install `protoc`
//! and the Go plugins, followed by the `protoc` invocation for one proto file.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use kitgen_core::{FileRules, GeneratedFile, Overwrite};

const POSIX_PREAMBLE: &str = "#!/usr/bin/env sh

# Install proto3
# sudo apt-get install -y git autoconf automake libtool curl make g++ unzip
# git clone https://github.com/google/protobuf.git
# cd protobuf/
# ./autogen.sh
# ./configure
# make
# make check
# sudo make install
# sudo ldconfig # refresh shared library cache.
#
# Update protoc Go bindings via
#  go install google.golang.org/protobuf/cmd/protoc-gen-go@latest
#  go install google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest
#
# See also
#  https://github.com/grpc/grpc-go/tree/master/examples
";

const WINDOWS_PREAMBLE: &str = ":: Install proto3.
:: https://github.com/google/protobuf/releases
:: Update protoc Go bindings via
::  go install google.golang.org/protobuf/cmd/protoc-gen-go@latest
::  go install google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest
::
:: See also
::  https://github.com/grpc/grpc-go/tree/master/examples
";

const DARWIN_PREAMBLE: &str = "#!/usr/bin/env sh

# Install proto3 from source macOS only.
#  brew install autoconf automake libtool
#  git clone https://github.com/google/protobuf
#  ./autogen.sh ; ./configure ; make ; make install
#
# Update protoc Go bindings via
#  go install google.golang.org/protobuf/cmd/protoc-gen-go@latest
#  go install google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest
# See also
#  https://github.com/grpc/grpc-go/tree/master/examples
";

const PROTOC: &str = "protoc --go_out=. --go_opt=paths=source_relative \\
\t\t--go-grpc_out=. --go-grpc_opt=paths=source_relative ";

/// Target platform of a compile script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    Windows,
    Darwin,
    #[default]
    Posix,
}

impl Platform {
    /// Map an OS name (`windows`, `darwin`, `macos`, `linux`, ...) to a
    /// platform. Unknown names fall back to [`Platform::Posix`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => Self::Windows,
            "darwin" | "mac" | "macos" | "osx" => Self::Darwin,
            _ => Self::Posix,
        }
    }

    /// The platform this binary runs on.
    pub fn host() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Conventional script file name.
    pub fn script_file_name(&self) -> &'static str {
        match self {
            Self::Windows => "compile.bat",
            Self::Darwin | Self::Posix => "compile.sh",
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            Self::Windows => WINDOWS_PREAMBLE,
            Self::Darwin => DARWIN_PREAMBLE,
            Self::Posix => POSIX_PREAMBLE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::Darwin => "darwin",
            Self::Posix => "posix",
        };
        f.write_str(name)
    }
}

/// Render the compile script for `proto_file`.
pub fn render_script(platform: Platform, proto_file: &str) -> String {
    format!("{}\n{}{}\n", platform.preamble(), PROTOC, proto_file)
}

/// A compile script written next to the proto file.
#[derive(Debug, Clone)]
pub struct CompileScript {
    platform: Platform,
    proto_file: String,
    overwrite: Overwrite,
}

impl CompileScript {
    pub fn new(platform: Platform, proto_file: impl Into<String>) -> Self {
        Self {
            platform,
            proto_file: proto_file.into(),
            overwrite: Overwrite::Never,
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl GeneratedFile for CompileScript {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.platform.script_file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: self.overwrite,
        }
    }

    fn render(&self) -> String {
        render_script(self.platform, &self.proto_file)
    }
}
