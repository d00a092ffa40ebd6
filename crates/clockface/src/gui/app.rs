use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::{dial, theme, window};
use dialkit::format::ChronoFormatter;
use dialkit::render::{ClockRenderModel, RenderSnapshot};
use dialkit::settings::{Settings, SettingsChange, SettingsStore};
use dialkit::style::{DialStyle, HandPalette};
use dialkit::ticker::TickerHandle;
use dialkit::time::TimeSnapshot;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppInit {
    pub config: Config,
    pub now: TimeSnapshot,
    pub ticker: TickerHandle,
    pub rx: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub store: SettingsStore,
    pub renderer: ClockRenderModel,
    pub now: TimeSnapshot,
    pub frame: Rc<RefCell<RenderSnapshot>>,
    pub ticker: TickerHandle,
    pub visible: bool,
    pub root: gtk::ApplicationWindow,
    pub dial_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Tick(TimeSnapshot),
    Change(SettingsChange),
    ToggleTheme,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Tick(snapshot) => AppMsg::Tick(snapshot),
            AppEvent::Change(change) => AppMsg::Change(change),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn formatter_for(config: &Config) -> ChronoFormatter {
    ChronoFormatter::new(&config.format).unwrap_or_else(|e| {
        log::error!("Falling back to default formatting: {}", e);
        ChronoFormatter::default()
    })
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Clockface"),
            set_resizable: false,
            add_css_class: "clockface-window",
            #[watch]
            set_visible: model.visible,

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 16,
                add_css_class: "clock-card",

                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 8,

                    gtk::Image {
                        set_icon_name: Some("preferences-system-time-symbolic"),
                    },
                    gtk::Label {
                        set_label: "Time",
                        set_hexpand: true,
                        set_xalign: 0.0,
                        add_css_class: "title",
                    },
                    gtk::Button {
                        set_icon_name: "emblem-system-symbolic",
                        set_tooltip_text: Some("Appearance settings"),
                        add_css_class: "control-btn",
                        #[watch]
                        set_class_active: ("active", model.settings().show_settings),
                        connect_clicked => AppMsg::Change(SettingsChange::ToggleSettings),
                    },
                    gtk::Button {
                        set_tooltip_text: Some("Toggle theme"),
                        add_css_class: "theme-toggle",
                        #[watch]
                        set_icon_name: theme::toggle_icon(model.settings().theme),
                        connect_clicked => AppMsg::ToggleTheme,
                    },
                },

                gtk::Revealer {
                    set_transition_type: gtk::RevealerTransitionType::SlideDown,
                    #[watch]
                    set_reveal_child: model.settings().show_settings,

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,
                        add_css_class: "settings-panel",

                        gtk::Box {
                            set_spacing: 6,

                            gtk::Label {
                                set_label: "Dial",
                                set_hexpand: true,
                                set_xalign: 0.0,
                            },
                            gtk::Button {
                                set_label: DialStyle::Arabic.caption(),
                                add_css_class: "style-btn",
                                #[watch]
                                set_class_active: ("selected", model.settings().dial_style == DialStyle::Arabic),
                                connect_clicked => AppMsg::Change(SettingsChange::DialStyle(DialStyle::Arabic)),
                            },
                            gtk::Button {
                                set_label: DialStyle::Roman.caption(),
                                add_css_class: "style-btn",
                                #[watch]
                                set_class_active: ("selected", model.settings().dial_style == DialStyle::Roman),
                                connect_clicked => AppMsg::Change(SettingsChange::DialStyle(DialStyle::Roman)),
                            },
                            gtk::Button {
                                set_label: DialStyle::Minimal.caption(),
                                add_css_class: "style-btn",
                                #[watch]
                                set_class_active: ("selected", model.settings().dial_style == DialStyle::Minimal),
                                connect_clicked => AppMsg::Change(SettingsChange::DialStyle(DialStyle::Minimal)),
                            },
                        },

                        gtk::Box {
                            set_spacing: 6,

                            gtk::Label {
                                set_label: "Hands",
                                set_hexpand: true,
                                set_xalign: 0.0,
                            },
                            gtk::Button {
                                set_css_classes: &["color-btn", "swatch-classic"],
                                set_tooltip_text: Some("classic"),
                                #[watch]
                                set_class_active: ("selected", model.settings().hand_palette == HandPalette::Classic),
                                connect_clicked => AppMsg::Change(SettingsChange::HandPalette(HandPalette::Classic)),
                            },
                            gtk::Button {
                                set_css_classes: &["color-btn", "swatch-ocean"],
                                set_tooltip_text: Some("ocean"),
                                #[watch]
                                set_class_active: ("selected", model.settings().hand_palette == HandPalette::Ocean),
                                connect_clicked => AppMsg::Change(SettingsChange::HandPalette(HandPalette::Ocean)),
                            },
                            gtk::Button {
                                set_css_classes: &["color-btn", "swatch-gold"],
                                set_tooltip_text: Some("gold"),
                                #[watch]
                                set_class_active: ("selected", model.settings().hand_palette == HandPalette::Gold),
                                connect_clicked => AppMsg::Change(SettingsChange::HandPalette(HandPalette::Gold)),
                            },
                        },
                    },
                },

                #[name = "dial_area"]
                gtk::DrawingArea {
                    set_content_width: dial::DIAL_SIZE,
                    set_content_height: dial::DIAL_SIZE,
                    set_halign: gtk::Align::Center,
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 4,

                    gtk::Label {
                        add_css_class: "digital-time",
                        #[watch]
                        set_label: &model.frame.borrow().time_text,
                    },
                    gtk::Box {
                        set_spacing: 6,
                        set_halign: gtk::Align::Center,
                        add_css_class: "date-display",

                        gtk::Image {
                            set_icon_name: Some("x-office-calendar-symbolic"),
                        },
                        gtk::Label {
                            #[watch]
                            set_label: &model.frame.borrow().date_text,
                        },
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            now,
            ticker,
            rx,
        } = init;

        theme::load_css();
        window::init_window(&root);

        let store = SettingsStore::new(config.settings());
        let renderer = ClockRenderModel::new(formatter_for(&config));
        let frame = Rc::new(RefCell::new(renderer.render(&now, store.current())));

        let model = AppModel {
            store,
            renderer,
            now,
            frame,
            ticker,
            visible: true,
            root: root.clone(),
            dial_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.dial_area = widgets.dial_area.clone();

        let frame_draw = model.frame.clone();
        widgets
            .dial_area
            .set_draw_func(move |_, cr, width, height| {
                if let Err(e) = dial::draw(cr, &frame_draw.borrow(), width as f64, height as f64)
                {
                    log::error!("Drawing error: {}", e);
                }
            });
        theme::apply_theme(&root, model.settings().theme);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::Tick(snapshot) => {
                // a tick may already be queued when the ticker is stopped
                if self.ticker.is_stopped() {
                    return;
                }
                self.now = snapshot;
                self.redraw();
            }
            AppMsg::Change(change) => {
                self.store.apply(change);
                self.redraw();
            }
            AppMsg::ToggleTheme => {
                let theme = self.settings().theme.toggled();
                self.store.set_theme(theme);
                self.redraw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.store.replace(new_config.settings());
                    self.renderer.set_formatter(formatter_for(&new_config));
                    self.redraw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        if self.ticker.stop() {
            log::info!("Clock stopped");
        }
    }
}

impl AppModel {
    pub fn settings(&self) -> &Settings {
        self.store.current()
    }

    /// Rebuilds the whole frame from the latest time and settings.
    fn redraw(&mut self) {
        *self.frame.borrow_mut() = self.renderer.render(&self.now, self.store.current());
        theme::apply_theme(&self.root, self.settings().theme);
        self.dial_area.queue_draw();
    }
}
