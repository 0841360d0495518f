use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use lcd_label::core::{render_into, DisplayConfig, LcdLabel, RenderRequest};
use lcd_label::stopwatch::Stopwatch;
use lcd_label::term::LcdView;
use lcd_label::types::{DotMatrix, Rgb};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn update_passes_do_not_allocate() {
    // Setup (outside counting) so rebuild allocations don't trip the gate.
    let mut config = DisplayConfig::default();
    config.set_lines(2).unwrap();
    config.set_style(DotMatrix::HitachiExtended);
    let mut slot = None;
    render_into(&config, "warm up", &mut slot, RenderRequest::Update, &mut ());

    let mut label = LcdLabel::new(DisplayConfig::default(), LcdView::new(Rgb::new(0, 0, 0)));
    let mut watch = Stopwatch::new();
    watch.toggle(Duration::ZERO);
    label.set_text("00:00:00");

    let allocs = with_alloc_counting(|| {
        for i in 0..100u64 {
            render_into(&config, "Hello, LCD \u{e7}", &mut slot, RenderRequest::Update, &mut ());

            // Stopwatch tick -> label text -> terminal painter.
            if watch.tick(Duration::from_millis(i * 10)) {
                label.set_text(&watch.display_text());
            }
        }
        label.set_on_color(Rgb::new(255, 0, 0));
    });

    assert_eq!(allocs, 0);
}
