use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use web_sys::HtmlInputElement;
use gloo_timers::callback::Timeout;
use log::info;
use crate::Route;
use crate::config;

const NOT_OPEN_NOTICE: &str = "Logins are not open yet. Check back soon!";

#[function_component]
pub fn Login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_bool_toggle(false);
    let notice = use_state(|| None::<String>);
    let notice_timeout = use_mut_ref(|| None::<Timeout>);

    // Drop any pending notice timer on unmount
    {
        let notice_timeout = notice_timeout.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    notice_timeout.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let notice = notice.clone();
        let notice_timeout = notice_timeout.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Login submitted, sign-in is not available yet");
            notice.set(Some(NOT_OPEN_NOTICE.to_string()));

            let notice = notice.clone();
            let timeout = Timeout::new(config::LOGIN_NOTICE_MS, move || {
                notice.set(None);
            });
            // Replacing the old timer cancels it
            *notice_timeout.borrow_mut() = Some(timeout);
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_password.toggle();
        })
    };

    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem;">
            <style>
            {r#".login-container {
                background: rgba(30, 30, 30, 0.7);
                border: 1px solid rgba(30, 144, 255, 0.1);
                border-radius: 16px;
                padding: 3rem;
                width: 100%;
                max-width: 480px;
                backdrop-filter: blur(10px);
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                color: #fff;
            }
            .login-container h1 {
                font-size: 2rem;
                margin-bottom: 1.5rem;
                text-align: center;
                background: linear-gradient(45deg, #fff, #7EB2FF);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .login-container form {
                display: flex;
                flex-direction: column;
                gap: 1rem;
            }
            .login-container input {
                background: rgba(0, 0, 0, 0.3);
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 8px;
                padding: 0.85rem 1rem;
                color: #fff;
                font-size: 1rem;
            }
            .password-row {
                display: flex;
                gap: 0.5rem;
            }
            .password-row input {
                flex: 1;
            }
            .password-toggle {
                background: none;
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 8px;
                color: #7EB2FF;
                padding: 0 1rem;
                cursor: pointer;
            }
            .login-container button[type="submit"] {
                background: #1E90FF;
                color: #fff;
                border: none;
                border-radius: 8px;
                padding: 0.85rem;
                font-size: 1rem;
                cursor: pointer;
            }
            .login-notice {
                text-align: center;
                color: #7EB2FF;
                margin-bottom: 1rem;
            }
            .auth-redirect {
                margin-top: 1.5rem;
                text-align: center;
                color: #999;
            }
            .auth-redirect a {
                color: #1E90FF;
                text-decoration: none;
            }
            @media (max-width: 768px) {
                .login-container {
                    padding: 2rem;
                    margin: 1rem;
                }
            }"#}
            </style>
            <div class="login-container">
                <h1>{"Login"}</h1>
                {
                    if let Some(message) = (*notice).as_ref() {
                        html! { <div class="login-notice">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <form {onsubmit}>
                    <input
                        type="email"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={let email = email.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <div class="password-row">
                        <input
                            type={if *show_password { "text" } else { "password" }}
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={let password = password.clone(); move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                password.set(input.value());
                            }}
                        />
                        <button class="password-toggle" type="button" onclick={toggle_password}>
                            {if *show_password { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button type="submit">{"Login"}</button>
                </form>
                <div class="auth-redirect">
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
