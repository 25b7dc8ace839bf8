// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request and response formatters
//!
//! A delegate turns one request or response into log lines. Both are
//! configured once from the interceptor's level and hold no per-call state.

use std::sync::Arc;

use reqwest::header::HeaderMap;

use super::logger::Logger;
use crate::http::{Request, Response};

/// Characters inspected when deciding whether a body is text
const TEXT_PROBE_CHARS: usize = 64;

/// Formats outgoing requests
#[derive(Clone)]
pub struct RequestDelegate {
    logger: Arc<dyn Logger>,
    log_body: bool,
    log_headers: bool,
}

impl RequestDelegate {
    pub fn new(logger: Arc<dyn Logger>, log_body: bool, log_headers: bool) -> Self {
        Self {
            logger,
            log_body,
            log_headers,
        }
    }

    /// Log `request` using `headers` in place of its own header map
    pub fn print_log(&self, request: &Request, headers: &HeaderMap) {
        let method = request.method.as_str();
        let body_len = request.body.as_ref().map(|b| b.len());

        let mut summary = format!("--> {} {}", method, request.url);
        if !self.log_headers {
            if let Some(len) = body_len {
                summary.push_str(&format!(" ({}-byte body)", len));
            }
        }
        self.logger.log(&summary);

        if !self.log_headers {
            return;
        }
        log_headers(self.logger.as_ref(), headers);

        if !self.log_body {
            self.logger.log(&format!("--> END {}", method));
            return;
        }

        match request.body.as_deref().filter(|b| !b.is_empty()) {
            None => self.logger.log(&format!("--> END {} (no body)", method)),
            Some(body) => match text_body(body, request.content_type()) {
                Some(text) => {
                    self.logger.log("");
                    log_text(self.logger.as_ref(), text);
                    self.logger
                        .log(&format!("--> END {} ({}-byte body)", method, body.len()));
                }
                None => self.logger.log(&format!(
                    "--> END {} (binary {}-byte body omitted)",
                    method,
                    body.len()
                )),
            },
        }
    }
}

/// Formats incoming responses and closes the call's block
#[derive(Clone)]
pub struct ResponseDelegate {
    logger: Arc<dyn Logger>,
    log_body: bool,
    log_headers: bool,
}

impl ResponseDelegate {
    pub fn new(logger: Arc<dyn Logger>, log_body: bool, log_headers: bool) -> Self {
        Self {
            logger,
            log_body,
            log_headers,
        }
    }

    /// Log `response` to `request` using `headers` in place of its own header map
    pub fn print_log(&self, request: &Request, response: &Response, headers: &HeaderMap) {
        let status = response.status;
        let mut summary = format!("<-- {}", status.as_u16());
        if let Some(reason) = status.canonical_reason() {
            summary.push(' ');
            summary.push_str(reason);
        }
        summary.push_str(&format!(" {}", response.url));
        if response.url != request.url {
            summary.push_str(&format!(" (redirected from {})", request.url));
        }
        if self.log_headers {
            summary.push_str(&format!(" ({}ms)", response.response_time_ms));
        } else {
            summary.push_str(&format!(
                " ({}ms, {}-byte body)",
                response.response_time_ms,
                response.body.len()
            ));
        }
        self.logger.log(&summary);

        if self.log_headers {
            log_headers(self.logger.as_ref(), headers);

            if !self.log_body {
                self.logger.log("<-- END HTTP");
            } else if response.body.is_empty() {
                self.logger.log("<-- END HTTP (no body)");
            } else {
                match text_body(&response.body, response.content_type()) {
                    Some(text) => {
                        self.logger.log("");
                        log_text(self.logger.as_ref(), text);
                        self.logger
                            .log(&format!("<-- END HTTP ({}-byte body)", response.body.len()));
                    }
                    None => self.logger.log(&format!(
                        "<-- END HTTP (binary {}-byte body omitted)",
                        response.body.len()
                    )),
                }
            }
        }

        self.logger.log_bottom_border();
    }
}

fn log_headers(logger: &dyn Logger, headers: &HeaderMap) {
    for (name, value) in headers {
        match value.to_str() {
            Ok(value) => logger.log(&format!("{}: {}", name.as_str(), value)),
            Err(_) => logger.log(&format!(
                "{}: <{}-byte non-text value>",
                name.as_str(),
                value.as_bytes().len()
            )),
        }
    }
}

fn log_text(logger: &dyn Logger, text: &str) {
    for line in text.lines() {
        logger.log(line);
    }
}

/// The body as text, or `None` when it should not be printed
fn text_body<'a>(body: &'a [u8], content_type: Option<&str>) -> Option<&'a str> {
    if content_type.map(is_binary_content_type).unwrap_or(false) {
        return None;
    }
    let text = std::str::from_utf8(body).ok()?;
    let printable = text
        .chars()
        .take(TEXT_PROBE_CHARS)
        .all(|c| !c.is_control() || c.is_whitespace());
    printable.then_some(text)
}

fn is_binary_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("image/")
        || mime.starts_with("audio/")
        || mime.starts_with("video/")
        || mime.starts_with("font/")
        || matches!(
            mime.as_str(),
            "application/octet-stream"
                | "application/zip"
                | "application/gzip"
                | "application/pdf"
                | "application/protobuf"
                | "application/x-protobuf"
        )
}
