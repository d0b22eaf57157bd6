// In production, this would be served from static assets or R2
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hoopshot</title>
    <style>
        body { margin: 0; padding: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background: #1a1a1a; color: #fff; font-family: monospace; }
        #game { display: flex; gap: 20px; align-items: flex-start; }
        #canvas { border: 2px solid #444; background: #000; max-width: 90vw; touch-action: none; cursor: grab; }
        #canvas:active { cursor: grabbing; }
        #ui { margin-top: 20px; text-align: center; }
        #hud { font-size: 18px; margin-bottom: 10px; }
        #status { margin: 10px 0; padding: 10px; background: #333; border-radius: 4px; }
        #board { min-width: 220px; padding: 10px; background: #222; border-radius: 4px; }
        #board h2 { font-size: 16px; margin: 0 0 8px 0; }
        #leaderboard { margin: 0; padding-left: 24px; }
        #leaderboard li { padding: 2px 0; }
        input, button { padding: 8px 16px; margin: 5px; font-family: monospace; font-size: 14px; }
        button { background: #4a9eff; color: white; border: none; border-radius: 4px; cursor: pointer; }
        button:hover { background: #5aaeff; }
        button:disabled { background: #666; cursor: not-allowed; }
    </style>
</head>
<body>
    <div id="game">
        <canvas id="canvas" width="800" height="600"></canvas>
        <div id="board">
            <h2>Leaderboard</h2>
            <ol id="leaderboard"></ol>
        </div>
    </div>
    <div id="ui">
        <div id="hud">Score: <span id="score">0</span> &nbsp; Best: <span id="best">-</span> &nbsp; Shots: <span id="shots">-</span></div>
        <div id="status">Loading WASM...</div>
        <div>
            <input type="text" id="playerName" placeholder="Your name" maxlength="24">
            <button id="resetBtn" disabled>Reset</button>
        </div>
        <div style="margin-top: 10px; font-size: 12px; color: #888;">
            Drag back from the ball and release to shoot
        </div>
    </div>
    <script type="module">
        import init, { start } from './pkg/client_wasm.js';

        let client = null;

        async function main() {
            try {
                await init();
                const canvas = document.getElementById('canvas');
                if (!canvas) throw new Error('Canvas not found');
                client = await start(canvas, window.location.origin);
                setupControls(canvas);
                startRenderLoop();
            } catch (error) {
                console.error('Error:', error);
                document.getElementById('status').textContent = 'Error: ' + (error.message || error);
            }
        }

        function setupControls(canvas) {
            canvas.addEventListener('pointerdown', (e) => {
                canvas.setPointerCapture(e.pointerId);
                client.pointer_down(e.clientX, e.clientY);
            });
            canvas.addEventListener('pointermove', (e) => client.pointer_move(e.clientX, e.clientY));
            canvas.addEventListener('pointerup', (e) => client.pointer_up(e.clientX, e.clientY));
            canvas.addEventListener('pointercancel', () => client.pointer_cancel());

            const name = document.getElementById('playerName');
            name.value = client.player_name();
            name.addEventListener('change', () => client.set_player_name(name.value));

            const reset = document.getElementById('resetBtn');
            reset.disabled = false;
            reset.addEventListener('click', () => client.reset());
        }

        function startRenderLoop() {
            function render(now) {
                try { client.frame(now); } catch (e) { console.error('Render error:', e); }
                requestAnimationFrame(render);
            }
            requestAnimationFrame(render);
        }

        main();
    </script>
</body>
</html>"#;
