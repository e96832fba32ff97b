//! Getting Started page: installation notes.

use omarchy_config::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::ui::theme::ThemeExt;

/// Kind of one prose line, mapped to a style at render time.
#[derive(Clone, Copy)]
enum Kind {
    Body,
    Heading,
    Warning,
    Mock,
    Emphasis,
    Blank,
}

const PROSE: &[(Kind, &str)] = &[
    (
        Kind::Body,
        "Omarchy is installed using an ISO. It's designed for a dedicated drive, so dual-booting \
         requires two disks in your machine (unless you do a manual install to work around this). \
         The installation will wipe the selected drive and use full-disk encryption, so be sure \
         to take a backup before using an existing drive!",
    ),
    (Kind::Blank, ""),
    (
        Kind::Body,
        "Download the Omarchy ISO first, put it on a USB stick (use balenaEtcher on Mac/Windows \
         or caligula on Linux), and boot off the stick.",
    ),
    (Kind::Blank, ""),
    (Kind::Warning, "WARNING: Secure Boot & TPM"),
    (
        Kind::Body,
        "Remember that many PCs ship with Secure Boot and/or TPM on in the BIOS. You have to turn \
         these off to be able to install Omarchy. They're Microsoft security schemes meant for \
         Windows and Microsoft-affiliated Linux distributions.",
    ),
    (Kind::Blank, ""),
    (Kind::Body, "Then answer the configuration questions, and confirm them like this:"),
    (Kind::Blank, ""),
    (Kind::Mock, "  Omarchy Installer"),
    (Kind::Mock, "  ? Confirm Installation Settings"),
    (Kind::Mock, "    ✔ Disk: /dev/nvme0n1 (1TB)"),
    (Kind::Mock, "    ✔ Encryption: LUKS2 (Enabled)"),
    (Kind::Mock, "    ✔ Swap: 16GB"),
    (Kind::Mock, "    ✔ Hostname: omarchy-desktop"),
    (Kind::Mock, "    [ Back ]  [ Install ]"),
    (Kind::Blank, ""),
    (
        Kind::Body,
        "Then select a drive for your installation, and sit back and watch the installation show \
         go. It takes between 2-10 minutes, depending on the speed of your computer.",
    ),
    (Kind::Blank, ""),
    (Kind::Mock, "  INSTALLATION COMPLETE"),
    (Kind::Mock, "  Please remove installation media and reboot."),
    (Kind::Blank, ""),
    (Kind::Emphasis, "Now you're ready to Omarchy!"),
    (Kind::Blank, ""),
    (Kind::Heading, "# Use a wired or 2.4ghz keyboard!"),
    (
        Kind::Body,
        "The full-disk encryption won't allow you to enter the password from a Bluetooth keyboard \
         at startup. Just like you can't use a Bluetooth keyboard to enter the BIOS on a PC. \
         You'll need a keyboard that either uses a 2.4ghz dongle or a cable (which is much nicer \
         for latency anyway!).",
    ),
    (Kind::Blank, ""),
    (Kind::Heading, "# Help if you're stuck"),
    (
        Kind::Body,
        "If you get stuck, you can usually find someone willing to help in the #omarchy-help \
         channel on the community Discord.",
    ),
    (Kind::Blank, ""),
    (Kind::Heading, "Special Needs?"),
    (
        Kind::Body,
        "If you have special needs, like installing Omarchy onto M-Series MacBooks with Asahi \
         Alarm or because you want to try dual-booting on a single drive, you should follow the \
         instructions for a manual installation.",
    ),
];

fn lines(palette: Palette) -> Vec<Line<'static>> {
    PROSE
        .iter()
        .map(|&(kind, text)| {
            let style = match kind {
                Kind::Body | Kind::Blank => palette.text(),
                Kind::Heading | Kind::Emphasis => palette.title(),
                Kind::Warning => palette.warning(),
                Kind::Mock => palette.surface(),
            };
            Line::from(Span::styled(text, style))
        })
        .collect()
}

/// Rows the page takes when wrapped to `width` columns.
pub fn line_count(width: u16) -> usize {
    let width = usize::from(width.max(1));
    PROSE
        .iter()
        .map(|(_, text)| text.chars().count().div_ceil(width).max(1))
        .sum()
}

pub fn render_getting_started(f: &mut Frame, area: Rect, scroll: usize, palette: Palette) {
    let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
    let p = Paragraph::new(lines(palette))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    f.render_widget(p, area);
}
