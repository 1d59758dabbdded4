//! Headless walkthrough of the dialog: build, open, expand, answer.
//!
//! Run with `cargo run --example msgbox_demo`. Set `RUST_LOG` to see the
//! library's tracing output.

use horizon_msgbox::{ButtonSet, DefaultButton, MessageIcon, MessageRequest, MsgBox};

fn main() {
    tracing_subscriber::fmt::init();
    horizon_msgbox_core::init_global_registry();

    let mut form = MsgBox::show(
        MessageRequest::new("The export finished with 3 warnings. Continue publishing?")
            .with_caption("Export")
            .with_icon(MessageIcon::Question)
            .with_buttons(ButtonSet::YesNoCancel)
            .with_default_button(DefaultButton::Button1)
            .with_attach("warning: missing alt text on 2 images\nwarning: oversized cover\nwarning: empty chapter 7"),
    );

    form.finished.connect(|result| {
        println!("dialog finished: {result:?}");
    });

    println!(
        "opened {}x{} ({} buttons, details collapsed)",
        form.client_size().width,
        form.client_size().height,
        form.buttons_panel().buttons().len()
    );

    // Expand the details region, stepping the animation the way a host
    // event loop would on a timer.
    form.toggle_details();
    while form.step_animation() {
        println!("  animating: height {}", form.client_size().height);
    }
    println!(
        "expanded to {} (details {}px)",
        form.client_size().height,
        form.attach_panel().map(|p| p.height()).unwrap_or(0.0)
    );

    // Answer "Yes".
    form.click_button(0);
    println!("result: {:?}", form.result());
}
