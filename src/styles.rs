/// Theme variables, shared keyframes and the shell layout. Page-specific
/// rules live next to each page.
pub const THEME: &str = r#"
    :root {
        --primary: #22d3ee;
        --primary-rgb: 34, 211, 238;
        --primary-foreground: #0b1120;
        --secondary: #1e293b;
        --secondary-rgb: 30, 41, 59;
        --accent-rgb: 168, 85, 247;
        --background: #070b14;
        --background-rgb: 7, 11, 20;
        --foreground: #e5e7eb;
        --muted-foreground: #94a3b8;
        --card: #0f172a;
        --card-rgb: 15, 23, 42;
        --border-rgb: 51, 65, 85;
    }

    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes shimmer {
        0% { transform: translateX(-100%); }
        100% { transform: translateX(100%); }
    }
    @keyframes rise-in {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
    @keyframes card-in {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes pop-in {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes slide-from-left {
        from { opacity: 0; transform: translateX(-20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slide-from-right {
        from { opacity: 0; transform: translateX(20px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes nav-drop {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes letter-in {
        from { opacity: 0; transform: translateY(20px) rotateX(-40deg); }
        to { opacity: 1; transform: translateY(0) rotateX(0); }
    }
    @keyframes pulse-scale { from { transform: scale(1); } to { transform: scale(1.02); } }
    @keyframes pulse-orb { from { transform: scale(1); } to { transform: scale(1.2); } }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-5px); }
    }
    @keyframes grow-width { from { width: 0; } to { width: 60%; } }
    @keyframes sparkle {
        0%, 100% { opacity: 0; transform: scale(0); }
        50% { opacity: 1; transform: scale(1); }
    }

    .app-shell {
        position: relative;
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        overflow: hidden;
    }
    .backdrop { position: fixed; inset: 0; z-index: -10; opacity: 0.2; overflow: hidden; pointer-events: none; }
    .blob { position: absolute; border-radius: 9999px; }
    .blob-a { top: 0; right: 0; width: 24rem; height: 24rem; background: rgba(var(--primary-rgb), 0.2); filter: blur(64px); }
    .blob-b { bottom: 0; left: 25%; width: 16rem; height: 16rem; background: rgba(var(--secondary-rgb), 0.2); filter: blur(40px); }
    .blob-c { top: 25%; left: 0; width: 18rem; height: 18rem; background: rgba(var(--primary-rgb), 0.1); filter: blur(40px); }
    .backdrop-grid { position: absolute; inset: 0; opacity: 0.1; }
    .page-main { flex-grow: 1; }

    .page-header { text-align: center; margin-bottom: 4rem; animation: rise-in 0.8s ease-out both; }
    .page-header h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
    .page-header p { font-size: 1.25rem; color: var(--muted-foreground); max-width: 42rem; margin: 0 auto; }
    .content-error { text-align: center; color: var(--muted-foreground); padding: 2rem 0; }

    .spotlight-overlay {
        position: absolute;
        inset: 0;
        pointer-events: none;
        opacity: 0;
        transition: opacity 0.5s;
    }
    .spotlight-always { opacity: 1; inset: -1px; z-index: 0; }

    .animated-text {
        display: flex;
        justify-content: center;
        flex-wrap: wrap;
        overflow: hidden;
        margin-bottom: 1.5rem;
        font-size: clamp(2.25rem, 6vw, 3.75rem);
        font-weight: 700;
        perspective: 400px;
    }
    .animated-letter {
        display: inline-block;
        opacity: 0;
        text-shadow: 0 1px 0 rgba(0, 0, 0, 0.1);
        animation: letter-in 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) forwards;
    }

    .sparkles { position: absolute; inset: 0; pointer-events: none; }
    .sparkle {
        position: absolute;
        width: 4px;
        height: 4px;
        border-radius: 9999px;
        background: var(--primary);
        opacity: 0;
    }

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        background: transparent;
        transition: background 0.3s, box-shadow 0.3s, backdrop-filter 0.3s;
        animation: nav-drop 0.4s ease-out;
    }
    .top-nav.scrolled {
        background: rgba(var(--background-rgb), 0.8);
        backdrop-filter: blur(12px);
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.3);
    }
    .top-nav:hover .nav-spotlight { opacity: 1; }
    .nav-content {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 4rem;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .nav-logo { position: relative; overflow: hidden; font-size: 1.5rem; font-weight: 700; color: var(--primary); }
    .nav-logo-underline {
        position: absolute;
        left: 0;
        bottom: 0;
        width: 100%;
        height: 2px;
        background: var(--primary);
        transform: scaleX(0);
        transform-origin: left;
        transition: transform 0.3s;
    }
    .nav-logo:hover .nav-logo-underline { transform: scaleX(1); }
    .nav-right { display: flex; align-items: center; gap: 0.5rem; }
    .nav-link {
        position: relative;
        overflow: hidden;
        padding: 0.5rem 1rem;
        border-radius: 0.375rem;
        color: var(--muted-foreground);
        transition: color 0.2s;
    }
    .nav-link:hover { color: var(--foreground); }
    .nav-link.active { color: var(--primary); font-weight: 500; }
    .nav-link-bg {
        position: absolute;
        inset: 0;
        border-radius: 0.375rem;
        background: rgba(var(--primary-rgb), 0.1);
        transform: scale(0);
        transition: transform 0.3s ease-out;
    }
    .nav-link:hover .nav-link-bg, .nav-link.active .nav-link-bg { transform: scale(1); }
    .nav-link-label { position: relative; z-index: 10; }
    .nav-indicator { position: absolute; left: 0; right: 0; bottom: 0; height: 2px; background: var(--primary); }
    .burger-menu {
        display: none;
        padding: 0.5rem;
        border: none;
        border-radius: 0.375rem;
        background: none;
        color: var(--foreground);
        font-size: 1.5rem;
        cursor: pointer;
        transition: color 0.2s, transform 0.15s;
    }
    .burger-menu:hover { color: var(--primary); transform: scale(1.05); }
    .mobile-menu { display: none; }
    @media (max-width: 767px) {
        .nav-right { display: none; }
        .burger-menu { display: block; }
        .mobile-menu {
            display: flex;
            flex-direction: column;
            gap: 0.25rem;
            padding: 0.5rem 0.5rem 0.75rem;
            background: rgba(var(--card-rgb), 0.9);
            backdrop-filter: blur(12px);
            animation: fade-in 0.3s ease-in-out;
        }
        .mobile-menu .nav-link { display: block; }
    }

    .site-footer { border-top: 1px solid rgba(var(--border-rgb), 1); background: var(--background); }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
        max-width: 80rem;
        margin: 0 auto;
        padding: 3rem 1rem 0;
    }
    @media (max-width: 767px) {
        .footer-grid { grid-template-columns: 1fr; }
    }
    .footer-logo { font-size: 1.5rem; font-weight: 700; color: var(--primary); }
    .footer-brand p, .footer-links a, .footer-social a, .footer-bottom p { color: var(--muted-foreground); }
    .footer-brand p { margin-top: 1rem; }
    .site-footer h3 { font-size: 1.125rem; font-weight: 600; }
    .footer-links { list-style: none; padding: 0; margin-top: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .footer-social { display: flex; gap: 1rem; margin-top: 1rem; }
    .footer-links a:hover, .footer-social a:hover { color: var(--primary); }
    .footer-bottom {
        max-width: 80rem;
        margin: 2rem auto 0;
        padding: 2rem 1rem 3rem;
        border-top: 1px solid rgba(var(--border-rgb), 1);
        text-align: center;
    }
"#;
