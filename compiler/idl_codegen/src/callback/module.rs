//! Target module of an interface.

use std::fmt;
use std::str::FromStr;

use idl_ir::InterfaceDecl;

use crate::CodegenError;

/// Annotation group and key holding an interface's module.
const MODULE_GROUP: &str = "WebKit";
const MODULE_KEY: &str = "module";

/// Managed package a declaration is generated into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetModule {
    Css,
    Dom,
    Events,
    Html,
    Js,
    Ranges,
    StyleSheets,
    Svg,
    Traversal,
    Xml,
    XPath,
}

impl TargetModule {
    pub const ALL: &'static [TargetModule] = &[
        TargetModule::Css,
        TargetModule::Dom,
        TargetModule::Events,
        TargetModule::Html,
        TargetModule::Js,
        TargetModule::Ranges,
        TargetModule::StyleSheets,
        TargetModule::Svg,
        TargetModule::Traversal,
        TargetModule::Xml,
        TargetModule::XPath,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetModule::Css => "css",
            TargetModule::Dom => "dom",
            TargetModule::Events => "events",
            TargetModule::Html => "html",
            TargetModule::Js => "js",
            TargetModule::Ranges => "ranges",
            TargetModule::StyleSheets => "stylesheets",
            TargetModule::Svg => "svg",
            TargetModule::Traversal => "traversal",
            TargetModule::Xml => "xml",
            TargetModule::XPath => "xpath",
        }
    }

    /// Module of an interface, from its `WebKit.module` annotation.
    ///
    /// An interface without the annotation belongs to `dom`.
    pub fn of<I: InterfaceDecl + ?Sized>(interface: &I) -> Result<Self, CodegenError> {
        match interface.annotation(MODULE_GROUP, MODULE_KEY) {
            None => Ok(TargetModule::Dom),
            Some(module) => module.parse().map_err(|()| CodegenError::UnmappedModule {
                interface: interface.name().to_owned(),
                module: module.to_owned(),
            }),
        }
    }
}

impl FromStr for TargetModule {
    type Err = ();

    /// Parse a declared module name, folding the engine's aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" | "dom" => Ok(TargetModule::Dom),
            "audio" | "webaudio" | "inspector" | "offline" | "p2p" | "window" | "websockets"
            | "threads" | "view" | "storage" | "fileapi" | "html" => Ok(TargetModule::Html),
            "css" => Ok(TargetModule::Css),
            "events" => Ok(TargetModule::Events),
            "js" => Ok(TargetModule::Js),
            "ranges" => Ok(TargetModule::Ranges),
            "stylesheets" => Ok(TargetModule::StyleSheets),
            "svg" => Ok(TargetModule::Svg),
            "traversal" => Ok(TargetModule::Traversal),
            "xml" => Ok(TargetModule::Xml),
            "xpath" => Ok(TargetModule::XPath),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TargetModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
